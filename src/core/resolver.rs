//! Manager auto-detection.
//!
//! When a command names a package without `-m`, every registered adapter is
//! probed. One match routes silently; several matches go to the [`Chooser`];
//! no match is `PackageNotFound`. Two matching managers are never resolved
//! without asking.

use crate::core::types::Manager;
use crate::error::{Result, UnifiedError};
use crate::packages::{ManagerRegistry, PackageManager};
use crate::traits::Chooser;
use crate::ui;

/// How an adapter decides whether it "has" a package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The package exists in the manager's index (for `install`)
    Available,
    /// The package is currently installed (for `update`, `upgrade`, `uninstall`)
    Installed,
}

/// Whether `manager` has `name` according to `probe`
pub fn probe(manager: &dyn PackageManager, name: &str, kind: Probe) -> Result<bool> {
    match kind {
        Probe::Available => Ok(manager
            .search(name)?
            .iter()
            .any(|record| manager.names_match(&record.name, name))),
        Probe::Installed => Ok(manager.installed_version(name)?.is_some()),
    }
}

/// Managers that report a match, in registry order.
///
/// A failing adapter is reported as a warning and skipped; the call only
/// fails when no adapter could answer at all.
pub fn matching_managers(
    registry: &ManagerRegistry,
    name: &str,
    kind: Probe,
) -> Result<Vec<Manager>> {
    let mut matched = Vec::new();
    let mut first_error = None;
    let mut answered = 0usize;

    for manager in registry.iter() {
        match probe(manager, name, kind) {
            Ok(found) => {
                answered += 1;
                ui::verbose(&format!(
                    "{}: '{}' {}",
                    manager.manager(),
                    name,
                    if found { "found" } else { "not found" }
                ));
                if found {
                    matched.push(manager.manager());
                }
            }
            Err(e) => {
                if first_error.is_some() {
                    ui::warning(&format!("{}: {}", manager.manager(), e));
                } else {
                    first_error = Some((manager.manager(), e));
                }
            }
        }
    }

    match first_error {
        Some((_, e)) if answered == 0 => Err(e),
        Some((manager, e)) => {
            ui::warning(&format!("{}: {}", manager, e));
            Ok(matched)
        }
        None => Ok(matched),
    }
}

/// Pick the manager that should handle `name`
pub fn resolve_manager(
    registry: &ManagerRegistry,
    name: &str,
    kind: Probe,
    chooser: &dyn Chooser,
) -> Result<Manager> {
    let matched = matching_managers(registry, name, kind)?;

    match matched.as_slice() {
        [] => Err(UnifiedError::PackageNotFound {
            name: name.to_string(),
            searched: registry.describe(),
        }),
        [only] => {
            ui::verbose(&format!("Using {} for '{}'", only, name));
            Ok(*only)
        }
        candidates => chooser.choose(name, candidates),
    }
}
