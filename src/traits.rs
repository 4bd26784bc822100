//! Core traits for dependency injection and testability
//!
//! Commands depend on these abstractions rather than on the terminal or on
//! real package managers, so both can be replaced in tests.

use crate::core::types::Manager;
use crate::error::Result;
use crate::packages::ManagerRegistry;

/// Picks one manager when a package name matches several.
pub trait Chooser {
    /// Return the chosen manager out of `candidates`, or fail when no choice
    /// can be made (for example, nobody is at the terminal).
    fn choose(&self, package: &str, candidates: &[Manager]) -> Result<Manager>;
}

/// Application context holding all dependencies
///
/// Built once at startup and handed to every command.
pub struct AppContext {
    /// Adapters for the wrapped package managers
    pub registry: ManagerRegistry,
    /// Disambiguation prompt
    pub chooser: Box<dyn Chooser>,
}

impl AppContext {
    pub fn new(registry: ManagerRegistry, chooser: Box<dyn Chooser>) -> Self {
        Self { registry, chooser }
    }
}
