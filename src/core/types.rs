use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

// Supported package managers.
// To add one, add a variant here and update:
// - Manager::name()
// - Manager::ALL
// - ManagerRegistry::from_config()
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Manager {
    /// Node.js packages, installed globally
    #[value(name = "npm")]
    Npm,
    /// Python packages
    #[value(name = "pip3", alias = "pip")]
    Pip,
}

impl Manager {
    pub const ALL: [Manager; 2] = [Manager::Npm, Manager::Pip];

    /// Name used on the command line and in output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pip => "pip3",
        }
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Manager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pip3" | "pip" => Ok(Self::Pip),
            other => Err(format!("Unknown package manager: {}", other)),
        }
    }
}

/// Which manager(s) a command targets. `Auto` unless `-m` was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagerChoice {
    Npm,
    Pip,
    #[default]
    Auto,
}

impl ManagerChoice {
    pub fn explicit(&self) -> Option<Manager> {
        match self {
            Self::Npm => Some(Manager::Npm),
            Self::Pip => Some(Manager::Pip),
            Self::Auto => None,
        }
    }
}

impl From<Option<Manager>> for ManagerChoice {
    fn from(flag: Option<Manager>) -> Self {
        match flag {
            Some(Manager::Npm) => Self::Npm,
            Some(Manager::Pip) => Self::Pip,
            None => Self::Auto,
        }
    }
}

// One row of manager output, normalized.
// Lives only for the duration of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub installed_version: Option<String>,
    pub latest_version: Option<String>,
    pub description: Option<String>,
    pub manager: Manager,
}

impl PackageRecord {
    pub fn installed(manager: Manager, name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            installed_version: version,
            latest_version: None,
            description: None,
            manager,
        }
    }

    /// A search hit: latest version known, nothing installed
    pub fn available(
        manager: Manager,
        name: impl Into<String>,
        version: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            installed_version: None,
            latest_version: version,
            description,
            manager,
        }
    }

    pub fn outdated(
        manager: Manager,
        name: impl Into<String>,
        current: Option<String>,
        latest: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            installed_version: current,
            latest_version: latest,
            description: None,
            manager,
        }
    }

    pub fn is_outdated(&self) -> bool {
        match (&self.installed_version, &self.latest_version) {
            (Some(current), Some(latest)) => current != latest,
            _ => false,
        }
    }
}

/// Result of an install/update/uninstall run by a wrapped manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub manager: Manager,
    pub package: String,
    /// Combined stdout and stderr of the tool
    pub output: String,
}
