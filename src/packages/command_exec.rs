//! Child process execution for the wrapped managers.
//!
//! Every invocation runs to completion before the next one starts; there is
//! no timeout and no retry.

use crate::core::types::{InstallOutcome, Manager};
use crate::error::{Result, UnifiedError};
use crate::packages::parsers;
use crate::ui;
use std::io;
use std::process::{Command, Output, Stdio};

/// Human-readable form of a command line, for messages
pub fn describe(binary: &str, args: &[&str]) -> String {
    let mut parts = vec![binary];
    parts.extend_from_slice(args);
    parts.join(" ")
}

/// Run a manager command with stdout and stderr captured (non-interactive)
pub fn run_captured(manager: Manager, binary: &str, args: &[&str]) -> Result<Output> {
    let command = describe(binary, args);
    ui::verbose(&format!("Running: {}", command));

    Command::new(binary)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| spawn_error(manager, command, e))
}

fn spawn_error(manager: Manager, command: String, e: io::Error) -> UnifiedError {
    if e.kind() == io::ErrorKind::NotFound {
        UnifiedError::ManagerUnavailable { manager }
    } else {
        UnifiedError::SystemCommandFailed {
            command,
            reason: e.to_string(),
        }
    }
}

/// Last meaningful line of stderr (falling back to stdout, then the exit status)
pub fn failure_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    stderr
        .lines()
        .chain(stdout.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| line.contains("ERR") || line.contains("error"))
        .or_else(|| stderr.lines().map(str::trim).rfind(|l| !l.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| match output.status.code() {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        })
}

/// Fail with `SystemCommandFailed` unless the exit code is one of `accepted`
pub fn require_exit(output: &Output, accepted: &[i32], binary: &str, args: &[&str]) -> Result<()> {
    match output.status.code() {
        Some(code) if accepted.contains(&code) => Ok(()),
        _ => Err(UnifiedError::SystemCommandFailed {
            command: describe(binary, args),
            reason: failure_reason(output),
        }),
    }
}

/// Turn the output of an install-like command into an outcome.
///
/// A failed run whose output says the package does not exist becomes
/// `PackageNotFound`; any other failure is an `InstallError`.
pub fn finish_install(
    manager: Manager,
    action: &str,
    package: &str,
    output: Output,
) -> Result<InstallOutcome> {
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        return Ok(InstallOutcome {
            manager,
            package: package.to_string(),
            output: combined,
        });
    }

    if parsers::indicates_missing_package(manager, &combined) {
        return Err(UnifiedError::PackageNotFound {
            name: package.to_string(),
            searched: manager.to_string(),
        });
    }

    Err(UnifiedError::InstallError {
        manager,
        action: action.to_string(),
        package: package.to_string(),
        reason: failure_reason(&output),
    })
}

#[cfg(test)]
mod tests;
