//! Error types for curve operations.

use parity_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The curve has no points.
    #[error("Curve has no points")]
    EmptyCurve,

    /// Two points share a tenor.
    #[error("Duplicate tenor {tenor} in curve")]
    DuplicateTenor {
        /// The repeated tenor.
        tenor: f64,
    },

    /// A tenor or rate is NaN or infinite.
    #[error("Non-finite curve point: tenor {tenor}, rate {rate}")]
    NonFinitePoint {
        /// Tenor of the offending point.
        tenor: f64,
        /// Rate of the offending point.
        rate: f64,
    },

    /// A curve specification string could not be parsed.
    #[error("Cannot parse curve point '{input}': {reason}")]
    Parse {
        /// The offending fragment.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] MathError),
}

impl CurveError {
    /// Creates a parse error.
    #[must_use]
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
