//! Simulated adapters for unit tests.

use crate::core::types::{InstallOutcome, Manager, PackageRecord};
use crate::error::{Result, UnifiedError};
use crate::packages::traits::PackageManager;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for a package manager.
///
/// `index` is what `search` can find, `installed` what `list_installed`
/// reports. Every trait call is appended to `calls` as `"<op> <arg>"`.
pub struct FakeManager {
    pub kind: Manager,
    pub available: bool,
    pub index: Vec<(String, String)>,
    pub installed: Vec<(String, String)>,
    pub outdated: Vec<(String, String, String)>,
    pub fail_install: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeManager {
    pub fn new(kind: Manager) -> Self {
        Self {
            kind,
            available: true,
            index: Vec::new(),
            installed: Vec::new(),
            outdated: Vec::new(),
            fail_install: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unavailable(kind: Manager) -> Self {
        Self {
            available: false,
            ..Self::new(kind)
        }
    }

    pub fn with_index(mut self, name: &str, version: &str) -> Self {
        self.index.push((name.to_string(), version.to_string()));
        self
    }

    pub fn with_installed(mut self, name: &str, version: &str) -> Self {
        self.installed.push((name.to_string(), version.to_string()));
        self
    }

    pub fn with_outdated(mut self, name: &str, current: &str, latest: &str) -> Self {
        self.outdated
            .push((name.to_string(), current.to_string(), latest.to_string()));
        self
    }

    /// Shared handle to the call log, usable after the fake is boxed
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, op: &str, arg: &str) -> Result<()> {
        self.calls
            .lock()
            .expect("call log lock")
            .push(format!("{} {}", op, arg).trim_end().to_string());
        if self.available {
            Ok(())
        } else {
            Err(UnifiedError::ManagerUnavailable { manager: self.kind })
        }
    }

    fn outcome(&self, name: &str) -> InstallOutcome {
        InstallOutcome {
            manager: self.kind,
            package: name.to_string(),
            output: format!("{} done", name),
        }
    }
}

impl PackageManager for FakeManager {
    fn manager(&self) -> Manager {
        self.kind
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn list_installed(&self) -> Result<Vec<PackageRecord>> {
        self.record("list", "")?;
        Ok(self
            .installed
            .iter()
            .map(|(name, version)| {
                PackageRecord::installed(self.kind, name.clone(), Some(version.clone()))
            })
            .collect())
    }

    fn search(&self, query: &str) -> Result<Vec<PackageRecord>> {
        self.record("search", query)?;
        Ok(self
            .index
            .iter()
            .filter(|(name, _)| name.contains(query))
            .map(|(name, version)| {
                PackageRecord::available(self.kind, name.clone(), Some(version.clone()), None)
            })
            .collect())
    }

    fn install(&self, name: &str) -> Result<InstallOutcome> {
        self.record("install", name)?;
        if let Some(reason) = &self.fail_install {
            return Err(UnifiedError::InstallError {
                manager: self.kind,
                action: "install".to_string(),
                package: name.to_string(),
                reason: reason.clone(),
            });
        }
        if !self.index.iter().any(|(n, _)| n == name) {
            return Err(UnifiedError::PackageNotFound {
                name: name.to_string(),
                searched: self.kind.to_string(),
            });
        }
        Ok(self.outcome(name))
    }

    fn check_outdated(&self) -> Result<Vec<PackageRecord>> {
        self.record("outdated", "")?;
        Ok(self
            .outdated
            .iter()
            .map(|(name, current, latest)| {
                PackageRecord::outdated(
                    self.kind,
                    name.clone(),
                    Some(current.clone()),
                    Some(latest.clone()),
                )
            })
            .collect())
    }

    fn update(&self, name: &str) -> Result<InstallOutcome> {
        self.record("update", name)?;
        Ok(self.outcome(name))
    }

    fn uninstall(&self, name: &str) -> Result<InstallOutcome> {
        self.record("uninstall", name)?;
        Ok(self.outcome(name))
    }
}

/// Chooser that answers with a fixed manager, or refuses like a
/// non-interactive session when `answer` is `None`.
pub struct ScriptedChooser {
    pub answer: Option<Manager>,
    pub asked: Arc<Mutex<Vec<Vec<Manager>>>>,
}

impl ScriptedChooser {
    pub fn answering(answer: Manager) -> Self {
        Self {
            answer: Some(answer),
            asked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn non_interactive() -> Self {
        Self {
            answer: None,
            asked: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl crate::traits::Chooser for ScriptedChooser {
    fn choose(&self, package: &str, candidates: &[Manager]) -> Result<Manager> {
        self.asked
            .lock()
            .expect("prompt log lock")
            .push(candidates.to_vec());
        self.answer.ok_or_else(|| UnifiedError::AmbiguousSelection {
            name: package.to_string(),
            candidates: crate::ui::prompt::join_managers(candidates),
        })
    }
}
