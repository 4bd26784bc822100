//! # Package Manager Registry
//!
//! Holds one adapter per wrapped manager. The registry is an explicit value:
//! `dispatch` builds it from [`RegistryConfig`] once per process and passes
//! it down, so tests can register simulated adapters instead.

use crate::core::types::{Manager, ManagerChoice};
use crate::error::{Result, UnifiedError};
use crate::packages::npm::NpmManager;
use crate::packages::pip::PipManager;
use crate::packages::traits::PackageManager;
use crate::project_identity;
use crate::utils::pypi::PypiClient;
use std::time::Duration;

/// Settings used to build the default adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub npm_binary: String,
    pub pip_binary: String,
    /// Base URL of the Python package index
    pub index_url: String,
    pub http_timeout: Duration,
    /// Maximum results per manager for `search`
    pub search_limit: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            npm_binary: "npm".to_string(),
            pip_binary: "pip3".to_string(),
            index_url: project_identity::DEFAULT_INDEX_URL.to_string(),
            http_timeout: Duration::from_secs(10),
            search_limit: 10,
        }
    }
}

#[derive(Default)]
pub struct ManagerRegistry {
    managers: Vec<Box<dyn PackageManager>>,
}

impl ManagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the npm and pip3 adapters, in that order
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut registry = Self::new();
        for manager in Manager::ALL {
            let adapter: Box<dyn PackageManager> = match manager {
                Manager::Npm => Box::new(NpmManager::new(
                    config.npm_binary.clone(),
                    config.search_limit,
                )),
                Manager::Pip => Box::new(PipManager::new(
                    config.pip_binary.clone(),
                    PypiClient::new(&config.index_url, config.http_timeout)?,
                    config.search_limit,
                )),
            };
            registry.register(adapter);
        }
        Ok(registry)
    }

    /// Add an adapter, replacing any earlier one for the same manager
    pub fn register(&mut self, manager: Box<dyn PackageManager>) {
        let kind = manager.manager();
        match self.managers.iter().position(|m| m.manager() == kind) {
            Some(idx) => self.managers[idx] = manager,
            None => self.managers.push(manager),
        }
    }

    pub fn get(&self, manager: Manager) -> Option<&dyn PackageManager> {
        self.managers
            .iter()
            .find(|m| m.manager() == manager)
            .map(|m| m.as_ref())
    }

    /// The adapter for `manager`, failing when it is missing or its executable is not on PATH
    pub fn require(&self, manager: Manager) -> Result<&dyn PackageManager> {
        self.get(manager)
            .filter(|m| m.is_available())
            .ok_or(UnifiedError::ManagerUnavailable { manager })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PackageManager> + '_ {
        self.managers.iter().map(|m| m.as_ref())
    }

    pub fn registered(&self) -> Vec<Manager> {
        self.iter().map(|m| m.manager()).collect()
    }

    /// Adapters a command should query: the forced one, or all of them
    pub fn select(&self, choice: ManagerChoice) -> Result<Vec<&dyn PackageManager>> {
        match choice.explicit() {
            Some(manager) => Ok(vec![self.require(manager)?]),
            None => Ok(self.iter().collect()),
        }
    }

    /// "npm or pip3", for messages naming every manager
    pub fn describe(&self) -> String {
        let registered = self.registered();
        let names: Vec<&str> = registered.iter().map(|m| m.name()).collect();
        match names.as_slice() {
            [] => "any package manager".to_string(),
            [only] => only.to_string(),
            [init @ .., last] => format!("{} or {}", init.join(", "), last),
        }
    }
}

#[cfg(test)]
mod tests;
