//! Error handling for the scanner driver.
//!
//! Malformed tokens are not errors at this level; they are part of the
//! token stream. These are the failures that stop a scan.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the scanner driver.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The source file could not be opened.
    #[error("cannot open {}: {}", .path.display(), .source)]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// Reading the source file failed part way through.
    #[error("failed reading {}: {}", .path.display(), .source)]
    Read {
        /// Path being scanned.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error writing the report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing the JSON report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ScanError.
pub type Result<T> = std::result::Result<T, ScanError>;
