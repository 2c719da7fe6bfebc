//! Error types for the Parity library.
//!
//! Errors raised below the bond layer: date construction and
//! day-count configuration.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type ParityResult<T> = Result<T, ParityError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParityError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Day count calculation error.
    #[error("Day count error: {reason}")]
    DayCountError {
        /// Description of the error.
        reason: String,
    },
}

impl ParityError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a day count error.
    #[must_use]
    pub fn day_count(reason: impl Into<String>) -> Self {
        Self::DayCountError {
            reason: reason.into(),
        }
    }
}
