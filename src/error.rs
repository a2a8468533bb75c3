//! Error types for srcscan.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by category resolution, scanning, logging, and preview.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A requested category name is not in the category table.
    #[error("Unknown category: {name} (known categories: {known})")]
    UnknownCategory { name: String, known: String },

    /// The request selected no categories at all.
    #[error("No categories requested")]
    NoCategories,

    /// A root or subdirectory could not be opened or read.
    #[error("Cannot access directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scan root exists but is not a directory.
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The scan log could not be written.
    #[error("Failed to write log file {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preview viewer could not be started.
    #[error("Failed to launch viewer '{program}': {source}")]
    ViewerLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create a directory access error.
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a log write error.
    pub fn log_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LogWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a viewer launch error.
    pub fn viewer_launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::ViewerLaunch {
            program: program.into(),
            source,
        }
    }
}

/// Result type alias for srcscan operations.
pub type Result<T> = std::result::Result<T, ScanError>;
