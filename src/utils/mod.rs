pub mod pypi;
pub mod sanitize;
