use crate::core::resolver::Probe;
use crate::core::types::{InstallOutcome, Manager};
use crate::error::Result;
use crate::traits::AppContext;
use crate::ui as output;

/// Remove `package` from the manager that has it installed
pub fn run(ctx: &AppContext, package: &str, forced: Option<Manager>) -> Result<InstallOutcome> {
    let manager = super::target(ctx, package, forced, Probe::Installed)?;

    output::info(&format!("Removing {} via {}...", package, manager.manager()));
    let outcome = manager.uninstall(package)?;
    super::show_tool_output(&outcome.output);

    output::success(&format!("Removed {} via {}", outcome.package, outcome.manager));
    Ok(outcome)
}
