//! Shared types for the echo-jot application.
//!
//! This module contains the crate-wide `Result` alias and the CLI command
//! surface.

use std::path::PathBuf;

use clap::Subcommand;

use crate::JotError;

/// A specialized Result type for echo-jot operations.
pub type Result<T> = std::result::Result<T, JotError>;

/// Available subcommands for the echo-jot application
#[derive(Subcommand)]
pub enum Commands {
    /// Select the journal root folder and remember it across sessions
    Select {
        /// Path to the folder holding YYYY-MM-DD day folders
        path: PathBuf,
    },

    /// Show the currently selected folder and its summary counts
    Status {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Count date folders, reminders, notes, and tasks by filename shape
    Stats {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Render the day-grouped journal timeline
    Timeline {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },
}
