//! Error handling for the bcc driver.
//!
//! Lexical errors from `bcc-lex` pass through unchanged so the user sees the
//! message together with its line and column.

use std::path::PathBuf;

use bcc_lex::LexicalError;
use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration could not be found or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The source file could not be opened.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },

    /// Lexing stopped on an error.
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
