//! Error types for the echo-jot application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur while locating, scanning, and rendering journal folders.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the echo-jot application.
#[derive(Error, Debug)]
pub enum JotError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization of persisted state.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors related to frontmatter parsing.
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    /// No journal folder has been selected yet.
    #[error("No journal folder selected. Run `echo-jot select <PATH>` first.")]
    NoFolderSelected,

    /// Access to the stored journal folder was denied.
    #[error("Access to {path} was denied. Re-select your journal folder to grant access.")]
    PermissionDenied { path: PathBuf },

    /// The selected path is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A folder enumeration failed mid-scan; the whole attempt is unreliable.
    #[error("Failed to scan journal folder: {message}")]
    ScanFailed { message: String },

    /// The handle store could not be read or written.
    #[error("Handle store unavailable: {message}")]
    StoreUnavailable { message: String },
}
