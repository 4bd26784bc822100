//! Update command
//!
//! Without a package name this reports what is outdated across managers.
//! With one it upgrades that package through the manager that has it
//! installed; `upgrade <name>` takes the same path.

use crate::core::resolver::Probe;
use crate::core::types::{InstallOutcome, Manager, ManagerChoice, PackageRecord};
use crate::error::Result;
use crate::project_identity;
use crate::traits::AppContext;
use crate::ui::{self as output, table};
use std::collections::HashSet;

/// Show outdated packages of the selected managers
pub fn run_report(ctx: &AppContext, choice: ManagerChoice) -> Result<()> {
    let outdated = outdated(ctx, choice)?;

    if outdated.is_empty() {
        output::success("All packages are up to date");
        return Ok(());
    }

    output::header("Outdated packages");
    table::render(table::TableKind::Outdated, &outdated);
    output::info(&format!("{} package(s) can be updated", outdated.len()));
    output::separator();
    output::info(&format!(
        "Run '{}' to update one",
        project_identity::update_hint("<package>")
    ));
    Ok(())
}

/// Outdated records, one per (manager, name), sorted by manager then name
pub fn outdated(ctx: &AppContext, choice: ManagerChoice) -> Result<Vec<PackageRecord>> {
    let managers = ctx.registry.select(choice)?;
    let gathered = super::gather(&managers, |manager| manager.check_outdated())?;
    super::report_failures(&gathered.failures);

    let mut seen = HashSet::new();
    let mut records: Vec<PackageRecord> = gathered
        .records
        .into_iter()
        .filter(|r| seen.insert((r.manager, r.name.clone())))
        .collect();
    records.sort_by(|a, b| (a.manager, &a.name).cmp(&(b.manager, &b.name)));
    Ok(records)
}

/// Upgrade one package in place
pub fn run_package(
    ctx: &AppContext,
    package: &str,
    forced: Option<Manager>,
) -> Result<InstallOutcome> {
    let manager = super::target(ctx, package, forced, Probe::Installed)?;

    output::info(&format!("Updating {} via {}...", package, manager.manager()));
    let outcome = manager.update(package)?;
    super::show_tool_output(&outcome.output);

    output::success(&format!("Updated {} via {}", outcome.package, outcome.manager));
    Ok(outcome)
}
