use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(
    version,
    about = "Local-first journal timeline over a folder of markdown day notes"
)]
pub struct Cli {
    /// Path to the handle-store file (defaults to the per-user data directory)
    #[clap(long, value_parser)]
    pub store: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the echo-jot application
    #[clap(subcommand)]
    pub command: Commands,
}
