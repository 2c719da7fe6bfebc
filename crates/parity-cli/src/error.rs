//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid rate curve.
    #[error("Invalid curve '{input}': {reason}. Use tenor:rate pairs, e.g. 0.5:4.1,2:4.4")]
    InvalidCurve {
        /// The text that failed to parse.
        input: String,
        /// Why it failed.
        reason: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// Why it failed.
        reason: String,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
