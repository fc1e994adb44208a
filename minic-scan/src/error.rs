//! Error handling module for the minic-scan CLI.
//!
//! The scanner itself cannot fail; everything here comes from the I/O and
//! configuration layer around it.

use thiserror::Error;

/// Main error type for the minic-scan CLI application.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the source file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ScanError.
pub type Result<T> = std::result::Result<T, ScanError>;
