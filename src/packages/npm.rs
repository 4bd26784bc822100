//! npm package manager
//!
//! Lists, installs and upgrades Node.js packages globally using npm.

use crate::core::types::{InstallOutcome, Manager, PackageRecord};
use crate::error::{Result, UnifiedError};
use crate::packages::command_exec::{self, finish_install, require_exit, run_captured};
use crate::packages::parsers;
use crate::packages::traits::PackageManager;
use crate::utils::sanitize;

pub struct NpmManager {
    binary: String,
    search_limit: usize,
}

impl NpmManager {
    pub fn new(binary: impl Into<String>, search_limit: usize) -> Self {
        Self {
            binary: binary.into(),
            search_limit,
        }
    }

    fn run_install_like(&self, action: &str, args: &[&str], name: &str) -> Result<InstallOutcome> {
        sanitize::validate_package_name(name)?;
        let output = run_captured(Manager::Npm, &self.binary, args)?;
        finish_install(Manager::Npm, action, name, output)
    }
}

impl PackageManager for NpmManager {
    fn manager(&self) -> Manager {
        Manager::Npm
    }

    fn is_available(&self) -> bool {
        which::which(&self.binary).is_ok()
    }

    fn list_installed(&self) -> Result<Vec<PackageRecord>> {
        let args = ["ls", "-g", "--depth=0", "--json"];
        let output = run_captured(Manager::Npm, &self.binary, &args)?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        // npm exits 1 on peer dependency problems but still prints the tree
        if !output.status.success() && stdout.trim().is_empty() {
            return Err(UnifiedError::SystemCommandFailed {
                command: command_exec::describe(&self.binary, &args),
                reason: command_exec::failure_reason(&output),
            });
        }

        parsers::parse_npm_list(&stdout)
    }

    fn search(&self, query: &str) -> Result<Vec<PackageRecord>> {
        sanitize::validate_search_query(query)?;

        let args = ["search", "--json", query];
        let output = run_captured(Manager::Npm, &self.binary, &args)?;
        require_exit(&output, &[0], &self.binary, &args)?;

        parsers::parse_npm_search(&String::from_utf8_lossy(&output.stdout), self.search_limit)
    }

    fn install(&self, name: &str) -> Result<InstallOutcome> {
        self.run_install_like("install", &["install", "-g", name], name)
    }

    fn check_outdated(&self) -> Result<Vec<PackageRecord>> {
        let args = ["outdated", "-g", "--json"];
        let output = run_captured(Manager::Npm, &self.binary, &args)?;
        // Exit code 1 means "there are outdated packages"
        require_exit(&output, &[0, 1], &self.binary, &args)?;

        parsers::parse_npm_outdated(&String::from_utf8_lossy(&output.stdout))
    }

    fn update(&self, name: &str) -> Result<InstallOutcome> {
        self.run_install_like("update", &["update", "-g", name], name)
    }

    fn uninstall(&self, name: &str) -> Result<InstallOutcome> {
        self.run_install_like("uninstall", &["uninstall", "-g", name], name)
    }
}
