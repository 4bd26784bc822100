use crate::core::types::{Manager, ManagerChoice};
use crate::project_identity;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "unified",
    about = "One front end for npm and pip3 packages",
    long_about = "Forwards list, search, install and update to npm or pip3.\n\
                  Without -m the right manager is detected from the package name.",
    version,
    next_line_help = false,
    term_width = 80,
    after_help = "Examples:\n  \
                  unified list\n  \
                  unified search left-pad\n  \
                  unified install numpy -m pip3\n  \
                  unified update"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Verbose output (show commands being run)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never prompt; fail when a package matches several managers
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of the Python package index
    #[arg(
        long,
        global = true,
        value_name = "URL",
        default_value = project_identity::DEFAULT_INDEX_URL
    )]
    pub index_url: String,
}

/// `-m/--manager`, shared by every package command
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ManagerFlag {
    /// Package manager to use instead of auto-detection
    #[arg(short = 'm', long = "manager", value_enum, value_name = "MANAGER")]
    pub manager: Option<Manager>,
}

impl ManagerFlag {
    pub fn choice(&self) -> ManagerChoice {
        self.manager.into()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List installed packages
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        target: ManagerFlag,
    },

    /// Search package indexes
    Search {
        /// Search term
        query: String,

        /// Maximum results per manager
        #[arg(short = 'l', long, value_name = "N", value_parser = parse_limit)]
        limit: Option<usize>,

        #[command(flatten)]
        target: ManagerFlag,
    },

    /// Install a package
    Install {
        /// Package name
        package: String,

        #[command(flatten)]
        target: ManagerFlag,
    },

    /// Show outdated packages, or update one package
    Update {
        /// Package to update (omit to list outdated packages)
        package: Option<String>,

        #[command(flatten)]
        target: ManagerFlag,
    },

    /// Upgrade a package to its latest version
    Upgrade {
        /// Package name
        package: String,

        #[command(flatten)]
        target: ManagerFlag,
    },

    /// Remove a package
    #[command(visible_alias = "remove")]
    Uninstall {
        /// Package name
        package: String,

        #[command(flatten)]
        target: ManagerFlag,
    },

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(_) => Err(format!("'{}' is not a number", value)),
    }
}
