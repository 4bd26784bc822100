//! Command dispatcher
//!
//! Builds the application context from the global flags and routes each
//! command to its handler.

use crate::cli::args::{Cli, Command, GlobalFlags};
use crate::commands;
use crate::error::Result;
use crate::packages::{ManagerRegistry, RegistryConfig};
use crate::traits::AppContext;
use crate::ui::{self as output, prompt::TerminalChooser};
use clap::CommandFactory;

impl From<&GlobalFlags> for RegistryConfig {
    fn from(flags: &GlobalFlags) -> Self {
        Self {
            index_url: flags.index_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    let Some(command) = &args.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Command::Completions { shell } = command {
        return commands::completions::run(*shell);
    }

    let mut config = RegistryConfig::from(&args.global);
    if let Command::Search {
        limit: Some(limit), ..
    } = command
    {
        config.search_limit = *limit;
    }

    let registry = ManagerRegistry::from_config(&config)?;
    report_availability(&registry);

    let ctx = AppContext::new(
        registry,
        Box::new(TerminalChooser::new(args.global.no_input)),
    );
    route(&ctx, command)
}

/// Run `command` against an already built context
pub fn route(ctx: &AppContext, command: &Command) -> Result<()> {
    match command {
        Command::List { target } => commands::list::run(ctx, target.choice()),

        Command::Search {
            query,
            limit,
            target,
        } => commands::search::run(
            ctx,
            commands::search::SearchOptions {
                query: query.clone(),
                choice: target.choice(),
                limit: *limit,
            },
        ),

        Command::Install { package, target } => {
            commands::install::run(ctx, package, target.manager).map(|_| ())
        }

        Command::Update {
            package: None,
            target,
        } => commands::update::run_report(ctx, target.choice()),

        Command::Update {
            package: Some(package),
            target,
        }
        | Command::Upgrade { package, target } => {
            commands::update::run_package(ctx, package, target.manager).map(|_| ())
        }

        Command::Uninstall { package, target } => {
            commands::uninstall::run(ctx, package, target.manager).map(|_| ())
        }

        Command::Completions { shell } => commands::completions::run(*shell),
    }
}

fn report_availability(registry: &ManagerRegistry) {
    if !output::is_verbose() {
        return;
    }
    for manager in registry.iter() {
        output::verbose(&format!(
            "{}: {}",
            manager.manager(),
            if manager.is_available() {
                "available"
            } else {
                "not found in PATH"
            }
        ));
    }
}
