//! retro-shelf CLI
//!
//! Builds the `games.json` catalog and cover index for the game list site.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use cli_types::{Cli, Commands};
use commands::covers::run_covers;
use commands::index::run_index;
use commands::lists::run_lists;
use commands::resolve_root;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let root = resolve_root(cli.root);

    match cli.command.unwrap_or(Commands::Lists { lists_dir: None }) {
        Commands::Lists { lists_dir } => run_lists(&root, lists_dir),
        Commands::Index => run_index(&root),
        Commands::Covers => run_covers(&root),
    }
}
