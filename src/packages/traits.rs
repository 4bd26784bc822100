use crate::core::types::{InstallOutcome, Manager, PackageRecord};
use crate::error::Result;

pub trait PackageManager: Send + Sync {
    fn manager(&self) -> Manager;

    /// Check if the executable can be found on PATH
    fn is_available(&self) -> bool;

    /// Packages currently installed, with `installed_version` populated
    fn list_installed(&self) -> Result<Vec<PackageRecord>>;

    /// Search the package index; hits carry `latest_version` only
    fn search(&self, query: &str) -> Result<Vec<PackageRecord>>;

    fn install(&self, name: &str) -> Result<InstallOutcome>;

    /// Installed packages with a newer release, both versions populated
    fn check_outdated(&self) -> Result<Vec<PackageRecord>>;

    /// Bring one installed package to its latest release
    fn update(&self, name: &str) -> Result<InstallOutcome>;

    fn uninstall(&self, name: &str) -> Result<InstallOutcome>;

    /// Installed version of `name`, if it is installed at all
    fn installed_version(&self, name: &str) -> Result<Option<String>> {
        Ok(self
            .list_installed()?
            .into_iter()
            .find(|record| self.names_match(&record.name, name))
            .map(|record| {
                record
                    .installed_version
                    .unwrap_or_else(|| "unknown".to_string())
            }))
    }

    /// Whether two names refer to the same package in this ecosystem
    fn names_match(&self, a: &str, b: &str) -> bool {
        a == b
    }
}
