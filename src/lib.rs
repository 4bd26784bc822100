pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod packages;
pub mod project_identity;
pub mod traits;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run unified CLI entrypoint.
pub fn run_cli() {
    // 1. Parse first so colour and verbosity settings apply to every message
    let args = cli::args::Cli::parse();
    ui::init_colors(args.global.no_color);
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    // 2. Signal Handling (child managers get SIGINT too; nothing to roll back)
    ctrlc::set_handler(move || {
        eprintln!();
        ui::warning("Operation cancelled by user.");
        exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    // 3. Run
    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
