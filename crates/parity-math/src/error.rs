//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// The function is not defined (or not real) at the given point.
    #[error("Function undefined at x = {x}: {reason}")]
    Domain {
        /// The offending point.
        x: f64,
        /// Why the function could not be evaluated.
        reason: String,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a domain error at `x`.
    #[must_use]
    pub fn domain(x: f64, reason: impl Into<String>) -> Self {
        Self::Domain {
            x,
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true for [`MathError::Domain`].
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_domain_error() {
        let err = MathError::domain(-150.0, "negative base");
        assert!(err.is_domain());
        assert!(err.to_string().contains("-150"));
        assert!(!MathError::invalid_input("x").is_domain());
    }
}
