use crate::core::resolver::Probe;
use crate::core::types::{InstallOutcome, Manager};
use crate::error::Result;
use crate::traits::AppContext;
use crate::ui as output;

/// Install `package` with the manager named by `-m`, or the one whose index
/// has it.
pub fn run(ctx: &AppContext, package: &str, forced: Option<Manager>) -> Result<InstallOutcome> {
    let manager = super::target(ctx, package, forced, Probe::Available)?;

    output::info(&format!(
        "Installing {} via {}...",
        package,
        manager.manager()
    ));
    let outcome = manager.install(package)?;
    super::show_tool_output(&outcome.output);

    output::success(&format!(
        "Installed {} via {}",
        outcome.package, outcome.manager
    ));
    Ok(outcome)
}
