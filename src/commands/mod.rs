//! Command handlers.
//!
//! Each handler takes the [`AppContext`] built by the dispatcher. Handlers
//! that merge results from several managers go through [`gather`], which
//! turns a failing manager into a warning as long as another one answered.

pub mod completions;
pub mod install;
pub mod list;
pub mod search;
pub mod uninstall;
pub mod update;

use crate::core::resolver::{self, Probe};
use crate::core::types::{Manager, PackageRecord};
use crate::error::{Result, UnifiedError};
use crate::packages::PackageManager;
use crate::traits::AppContext;
use crate::ui as output;
use crate::utils::sanitize;

/// Records collected from several managers, plus the managers that failed
#[derive(Debug, Default)]
pub struct Gathered {
    pub records: Vec<PackageRecord>,
    pub failures: Vec<(Manager, UnifiedError)>,
}

/// Run `op` against every manager in order.
///
/// Fails with the first error only when every manager failed; otherwise the
/// failures are returned alongside the records that were collected.
pub fn gather<F>(managers: &[&dyn PackageManager], mut op: F) -> Result<Gathered>
where
    F: FnMut(&dyn PackageManager) -> Result<Vec<PackageRecord>>,
{
    let mut gathered = Gathered::default();
    let mut answered = 0usize;

    for manager in managers {
        match op(*manager) {
            Ok(records) => {
                answered += 1;
                gathered.records.extend(records);
            }
            Err(e) => gathered.failures.push((manager.manager(), e)),
        }
    }

    if answered == 0 && !gathered.failures.is_empty() {
        let (_, first) = gathered.failures.remove(0);
        report_failures(&gathered.failures);
        return Err(first);
    }

    Ok(gathered)
}

/// One warning line per failed manager
pub fn report_failures(failures: &[(Manager, UnifiedError)]) {
    for (manager, e) in failures {
        output::warning(&format!("{}: {}", manager, e));
    }
}

/// The adapter that should handle `package`: the one named by `-m`, or the
/// one auto-detection settles on.
pub(crate) fn target<'a>(
    ctx: &'a AppContext,
    package: &str,
    forced: Option<Manager>,
    probe: Probe,
) -> Result<&'a dyn PackageManager> {
    sanitize::validate_package_name(package)?;

    let manager = match forced {
        Some(manager) => manager,
        None => resolver::resolve_manager(&ctx.registry, package, probe, ctx.chooser.as_ref())?,
    };

    ctx.registry.require(manager)
}

/// Echo a tool's own output in verbose mode
pub(crate) fn show_tool_output(output: &str) {
    if !output::is_verbose() {
        return;
    }
    for line in output.lines().filter(|l| !l.trim().is_empty()) {
        output::indent(line, 1);
    }
}
