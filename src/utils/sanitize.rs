//! Input validation for names handed to the wrapped managers
//!
//! Arguments are passed to child processes directly (never through a
//! shell), so the concern here is names that the tools would read as
//! flags, paths or placeholders.

use crate::error::{Result, UnifiedError};
use regex::Regex;
use std::sync::LazyLock;

/// npm caps names at 214 characters; PyPI has no lower limit worth enforcing
pub const MAX_NAME_LEN: usize = 214;

/// Allows: alphanumeric, dash, underscore, dot, plus, at sign (npm version
/// tags), slash (scoped npm packages) and tilde. pip version specifiers such
/// as `numpy==1.26` are rejected: no manager reports them as a package name.
static SAFE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._+/~-]+$").expect("Invalid regex pattern"));

/// PEP 508 project name
static PYPI_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$").expect("Invalid regex pattern")
});

/// Names copied verbatim from usage examples
const PLACEHOLDER_NAMES: &[&str] = &["package-name", "<package>", "<package-name>", "<name>"];

/// Validate a package name before it reaches a package manager
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(UnifiedError::InvalidPackageName(
            "Package name cannot be empty".to_string(),
        ));
    }

    if PLACEHOLDER_NAMES.contains(&name.trim()) {
        return Err(UnifiedError::InvalidPackageName(format!(
            "'{}' is a placeholder; replace it with a real package name",
            name
        )));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(UnifiedError::InvalidPackageName(format!(
            "Package name too long (max {} chars): {}...",
            MAX_NAME_LEN,
            name.chars().take(50).collect::<String>()
        )));
    }

    if name.starts_with('-') {
        return Err(UnifiedError::InvalidPackageName(format!(
            "Package name cannot start with '-': {}",
            name
        )));
    }

    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(UnifiedError::InvalidPackageName(format!(
            "Package name contains invalid characters: {}",
            name
        )));
    }

    // Prevent path traversal
    if name.contains("..") {
        return Err(UnifiedError::InvalidPackageName(format!(
            "Package name cannot contain path traversal: {}",
            name
        )));
    }

    Ok(())
}

/// Search queries are free text, but must not look like a flag
pub fn validate_search_query(query: &str) -> Result<()> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(UnifiedError::InvalidPackageName(
            "Search query cannot be empty".to_string(),
        ));
    }
    if trimmed.starts_with('-') {
        return Err(UnifiedError::InvalidPackageName(format!(
            "Search query cannot start with '-': {}",
            query
        )));
    }
    if query.chars().any(char::is_control) {
        return Err(UnifiedError::InvalidPackageName(
            "Search query contains control characters".to_string(),
        ));
    }
    Ok(())
}

/// Whether `name` could be a PyPI project name (and so an exact lookup makes sense)
pub fn is_valid_pypi_name(name: &str) -> bool {
    PYPI_NAME.is_match(name)
}

#[cfg(test)]
mod tests;
