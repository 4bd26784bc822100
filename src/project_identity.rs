//! Central project identity contract.
//!
//! Runtime names and default endpoints are defined here and nowhere else.

pub const BINARY_NAME: &str = "unified";
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

pub fn user_agent() -> String {
    format!("{}-cli/{}", BINARY_NAME, env!("CARGO_PKG_VERSION"))
}

/// Command line a user can run to update a single package.
pub fn update_hint(package: &str) -> String {
    format!("{} update {}", BINARY_NAME, package)
}
