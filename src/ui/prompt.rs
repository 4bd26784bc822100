//! Interactive manager selection.

use crate::core::types::Manager;
use crate::error::{Result, UnifiedError};
use crate::traits::Chooser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// "npm and pip3"
pub fn join_managers(managers: &[Manager]) -> String {
    let names: Vec<&str> = managers.iter().map(|m| m.name()).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Interpret an answer to the numbered prompt: a 1-based index or a manager name
pub fn parse_choice(input: &str, candidates: &[Manager]) -> Option<Manager> {
    let input = input.trim();
    if let Ok(idx) = input.parse::<usize>() {
        return idx.checked_sub(1).and_then(|i| candidates.get(i)).copied();
    }
    input
        .parse::<Manager>()
        .ok()
        .filter(|m| candidates.contains(m))
}

/// Ask the user to pick one of `candidates`, reading the answer from `input`
pub fn prompt_manager<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    package: &str,
    candidates: &[Manager],
) -> Result<Manager> {
    writeln!(
        out,
        "{} Package '{}' was found in several managers:",
        "?".yellow().bold(),
        package.cyan()
    )?;
    for (idx, manager) in candidates.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, manager)?;
    }
    write!(out, "Select manager (1-{}): ", candidates.len())?;
    out.flush()?;

    let mut answer = String::new();
    // No input left: nobody can answer, same as a non-interactive run
    if input.read_line(&mut answer)? == 0 {
        return Err(UnifiedError::AmbiguousSelection {
            name: package.to_string(),
            candidates: join_managers(candidates),
        });
    }

    parse_choice(&answer, candidates)
        .ok_or_else(|| UnifiedError::InvalidSelection(format!("'{}'", answer.trim())))
}

/// Prompts on the controlling terminal; refuses when there is none.
pub struct TerminalChooser {
    no_input: bool,
}

impl TerminalChooser {
    pub fn new(no_input: bool) -> Self {
        Self { no_input }
    }
}

impl Chooser for TerminalChooser {
    fn choose(&self, package: &str, candidates: &[Manager]) -> Result<Manager> {
        if self.no_input || !atty::is(atty::Stream::Stdin) {
            return Err(UnifiedError::AmbiguousSelection {
                name: package.to_string(),
                candidates: join_managers(candidates),
            });
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        prompt_manager(&mut stdin.lock(), &mut stdout.lock(), package, candidates)
    }
}
