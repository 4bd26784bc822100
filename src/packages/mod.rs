//! # Package Manager Adapters
//!
//! Every wrapped tool is driven through the [`PackageManager`] trait and
//! reports its results as [`PackageRecord`](crate::core::types::PackageRecord)s.
//!
//! - **npm** (`npm.rs`): global Node.js packages
//! - **pip3** (`pip.rs`): Python packages, with PyPI lookups for search
//!
//! Adapters are collected in a [`ManagerRegistry`] built once at startup;
//! commands receive it through [`AppContext`](crate::traits::AppContext).

pub mod command_exec;
pub mod npm;
pub mod parsers;
pub mod pip;
pub mod registry;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use registry::{ManagerRegistry, RegistryConfig};
pub use traits::PackageManager;
