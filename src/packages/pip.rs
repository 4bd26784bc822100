//! pip3 package manager
//!
//! `pip search` was disabled upstream, so searches go to the PyPI index
//! directly; everything else shells out to pip3.

use crate::core::types::{InstallOutcome, Manager, PackageRecord};
use crate::error::Result;
use crate::packages::command_exec::{finish_install, require_exit, run_captured};
use crate::packages::parsers;
use crate::packages::traits::PackageManager;
use crate::ui;
use crate::utils::pypi::PypiClient;
use crate::utils::sanitize;

pub struct PipManager {
    binary: String,
    index: PypiClient,
    search_limit: usize,
}

impl PipManager {
    pub fn new(binary: impl Into<String>, index: PypiClient, search_limit: usize) -> Self {
        Self {
            binary: binary.into(),
            index,
            search_limit,
        }
    }

    fn run_install_like(&self, action: &str, args: &[&str], name: &str) -> Result<InstallOutcome> {
        sanitize::validate_package_name(name)?;
        let output = run_captured(Manager::Pip, &self.binary, args)?;
        finish_install(Manager::Pip, action, name, output)
    }
}

impl PackageManager for PipManager {
    fn manager(&self) -> Manager {
        Manager::Pip
    }

    fn is_available(&self) -> bool {
        which::which(&self.binary).is_ok()
    }

    fn list_installed(&self) -> Result<Vec<PackageRecord>> {
        let args = ["list", "--format=json"];
        let output = run_captured(Manager::Pip, &self.binary, &args)?;
        require_exit(&output, &[0], &self.binary, &args)?;

        parsers::parse_pip_list(&String::from_utf8_lossy(&output.stdout))
    }

    fn search(&self, query: &str) -> Result<Vec<PackageRecord>> {
        sanitize::validate_search_query(query)?;

        // Exact project first; the HTML search only when the name is unknown
        if sanitize::is_valid_pypi_name(query) {
            if let Some(record) = self.index.project(query)? {
                return Ok(vec![record]);
            }
            ui::verbose(&format!(
                "No project named '{}' on {}, trying full-text search",
                query,
                self.index.base_url()
            ));
        }

        self.index.search(query, self.search_limit)
    }

    fn install(&self, name: &str) -> Result<InstallOutcome> {
        self.run_install_like("install", &["install", name], name)
    }

    fn check_outdated(&self) -> Result<Vec<PackageRecord>> {
        let args = ["list", "--outdated", "--format=json"];
        let output = run_captured(Manager::Pip, &self.binary, &args)?;
        require_exit(&output, &[0], &self.binary, &args)?;

        parsers::parse_pip_outdated(&String::from_utf8_lossy(&output.stdout))
    }

    fn update(&self, name: &str) -> Result<InstallOutcome> {
        self.run_install_like("update", &["install", "--upgrade", name], name)
    }

    fn uninstall(&self, name: &str) -> Result<InstallOutcome> {
        self.run_install_like("uninstall", &["uninstall", "-y", name], name)
    }

    fn installed_version(&self, name: &str) -> Result<Option<String>> {
        sanitize::validate_package_name(name)?;

        let output = run_captured(Manager::Pip, &self.binary, &["show", name])?;
        // pip3 show exits 1 with "Package(s) not found"
        if !output.status.success() {
            return Ok(None);
        }

        let info = parsers::parse_pip_show(&String::from_utf8_lossy(&output.stdout));
        Ok(info.get("version").cloned())
    }

    fn names_match(&self, a: &str, b: &str) -> bool {
        parsers::normalize_pip_name(a) == parsers::normalize_pip_name(b)
    }
}

#[cfg(test)]
mod tests;
