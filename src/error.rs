use crate::core::types::Manager;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnifiedError {
    #[error("{manager} is not installed or not in PATH")]
    ManagerUnavailable { manager: Manager },

    #[error("Unexpected {manager} output: {message}")]
    ParseError { manager: Manager, message: String },

    #[error("Package '{name}' not found in {searched}")]
    PackageNotFound { name: String, searched: String },

    #[error(
        "Package '{name}' matches more than one manager ({candidates}); rerun with -m <manager> to choose"
    )]
    AmbiguousSelection { name: String, candidates: String },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Package index request failed: {0}")]
    NetworkError(String),

    #[error("Failed to {action} '{package}' via {manager}: {reason}")]
    InstallError {
        manager: Manager,
        action: String,
        package: String,
        reason: String,
    },

    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UnifiedError>;
