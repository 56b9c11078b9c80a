//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "retro-shelf")]
#[command(about = "Build the game catalog JSON from per-console lists", long_about = None)]
pub(crate) struct Cli {
    /// Site root containing lists/, Covers/ and docs/ (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build games.json from the per-console .txt lists
    Lists {
        /// Directory holding the .txt lists (default: <root>/lists).
        /// games.json is written to its parent directory
        #[arg(long)]
        lists_dir: Option<PathBuf>,
    },

    /// Build games.json from lists/Indexs/<system>_Index/*_index.json
    Index,

    /// Build docs/coverIndex.json from index files or the Covers/ tree
    Covers,
}
