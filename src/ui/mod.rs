use colored::Colorize;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

pub mod prompt;
pub mod table;

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Disable colours when asked to, or when stdout is not a terminal
pub fn init_colors(no_color: bool) {
    if no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Status line on stdout. A closed or failing stdout only loses the line.
fn out(line: fmt::Arguments<'_>) {
    let _ = writeln!(io::stdout().lock(), "{}", line);
}

pub fn header(title: &str) {
    if is_quiet() {
        return;
    }
    out(format_args!("\n{}", title.bold().underline()));
}

pub fn success(msg: &str) {
    if is_quiet() {
        return;
    }
    out(format_args!("{} {}", "✓".green().bold(), msg));
}

pub fn info(msg: &str) {
    if is_quiet() {
        return;
    }
    out(format_args!("{} {}", "ℹ".blue().bold(), msg));
}

/// Trace line, shown only with --verbose
pub fn verbose(msg: &str) {
    if !is_verbose() {
        return;
    }
    eprintln!("{} {}", "·".bright_black(), msg.dimmed());
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn separator() {
    if is_quiet() {
        return;
    }
    out(format_args!("{}", "─".repeat(60).bright_black()));
}

pub fn indent(msg: &str, level: usize) {
    let spaces = " ".repeat(level * 2);
    out(format_args!("{}{}", spaces, msg));
}
