//! List command
//!
//! Installed packages of every manager, each with its latest known release.

use crate::core::types::{ManagerChoice, PackageRecord};
use crate::error::Result;
use crate::packages::PackageManager;
use crate::traits::AppContext;
use crate::ui::{self as output, table};

pub fn run(ctx: &AppContext, choice: ManagerChoice) -> Result<()> {
    let packages = collect(ctx, choice)?;

    if packages.is_empty() {
        output::info("No packages installed");
        return Ok(());
    }

    table::render(table::TableKind::Installed, &packages);

    let outdated = packages.iter().filter(|p| p.is_outdated()).count();
    if outdated > 0 {
        output::info(&format!(
            "Total packages found: {} ({} outdated)",
            packages.len(),
            outdated
        ));
    } else {
        output::info(&format!("Total packages found: {}", packages.len()));
    }
    Ok(())
}

/// Installed records of the selected managers, sorted by manager then name
pub fn collect(ctx: &AppContext, choice: ManagerChoice) -> Result<Vec<PackageRecord>> {
    let managers = ctx.registry.select(choice)?;
    let gathered = super::gather(&managers, |manager| {
        let installed = manager.list_installed()?;
        Ok(with_latest(manager, installed))
    })?;
    super::report_failures(&gathered.failures);

    let mut packages = gathered.records;
    packages.sort_by(|a, b| (a.manager, &a.name).cmp(&(b.manager, &b.name)));
    Ok(packages)
}

/// Fill in `latest_version` from the manager's outdated report.
///
/// Packages missing from a successful report are up to date. When the
/// report itself fails the latest column stays unknown.
fn with_latest(manager: &dyn PackageManager, mut installed: Vec<PackageRecord>) -> Vec<PackageRecord> {
    let outdated = match manager.check_outdated() {
        Ok(outdated) => outdated,
        Err(e) => {
            output::warning(&format!(
                "{}: could not check for newer versions: {}",
                manager.manager(),
                e
            ));
            return installed;
        }
    };

    for record in &mut installed {
        let newer = outdated
            .iter()
            .find(|o| manager.names_match(&o.name, &record.name))
            .and_then(|o| o.latest_version.clone());
        record.latest_version = newer.or_else(|| record.installed_version.clone());
    }
    installed
}
