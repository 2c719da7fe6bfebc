//! Error types for bond operations.

use parity_core::{Date, ParityError};
use parity_curves::CurveError;
use parity_math::MathError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// An input is outside the range the calculation accepts.
    #[error("Invalid {parameter}: {reason}")]
    Domain {
        /// Name of the offending parameter.
        parameter: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// No coupon date satisfies the request.
    #[error(
        "No coupon date found for as-of {as_of}, maturity {maturity} \
         (frequency {frequency}, {days_per_year} days per year)"
    )]
    ScheduleExhausted {
        /// Valuation date.
        as_of: Date,
        /// Maturity date.
        maturity: Date,
        /// Coupons per year.
        frequency: u32,
        /// Day-count denominator.
        days_per_year: u32,
    },

    /// A schedule step lands back on the date it started from once
    /// re-anchored to the maturity's day, so the walk cannot progress.
    #[error(
        "Coupon schedule for maturity {maturity} stalls at {stalled_at}: a {step_days}-day step \
         returns to the same date (frequency {frequency}, {days_per_year} days per year)"
    )]
    ScheduleStalled {
        /// Maturity date the schedule is anchored to.
        maturity: Date,
        /// Date the step failed to move past.
        stalled_at: Date,
        /// Signed step length in days.
        step_days: i64,
        /// Coupons per year.
        frequency: u32,
        /// Day-count denominator.
        days_per_year: u32,
    },

    /// Present value does not respond to yield, so no yield gives `price`.
    #[error(
        "Price {price} is unreachable for coupon {coupon_rate}% \
         (as-of {as_of}, maturity {maturity}): present value does not depend on yield"
    )]
    PriceUnreachable {
        /// The target price.
        price: f64,
        /// Valuation date.
        as_of: Date,
        /// Maturity date.
        maturity: Date,
        /// Annual coupon rate in percent.
        coupon_rate: f64,
    },

    /// Discounting at this yield has no real value.
    #[error(
        "Yield {yield_pct}% has no real discount factor \
         (as-of {as_of}, maturity {maturity}, coupon {coupon_rate}%)"
    )]
    NumericalDomain {
        /// The yield in percent.
        yield_pct: f64,
        /// Valuation date.
        as_of: Date,
        /// Maturity date.
        maturity: Date,
        /// Annual coupon rate in percent.
        coupon_rate: f64,
    },

    /// Yield calculation failed to converge.
    #[error(
        "Yield calculation failed to converge after {iterations} iterations \
         (residual: {residual:.2e})"
    )]
    YieldConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] ParityError),

    /// Math library error.
    #[error("Math error: {0}")]
    MathError(#[from] MathError),

    /// Curve error.
    #[error("Curve error: {0}")]
    CurveError(#[from] CurveError),
}

impl BondError {
    /// Creates a domain error for `parameter`.
    #[must_use]
    pub fn domain(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Domain {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error() {
        let err = BondError::domain("frequency", "must be at least 1");
        assert_eq!(err.to_string(), "Invalid frequency: must be at least 1");
    }

    #[test]
    fn test_numerical_domain_display() {
        let err = BondError::NumericalDomain {
            yield_pct: -150.0,
            as_of: Date::from_ymd(2025, 4, 17).unwrap(),
            maturity: Date::from_ymd(2048, 9, 25).unwrap(),
            coupon_rate: 5.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("-150"));
        assert!(msg.contains("2025-04-17"));
        assert!(msg.contains("2048-09-25"));
    }

    #[test]
    fn test_schedule_stalled_display() {
        let err = BondError::ScheduleStalled {
            maturity: Date::from_ymd(2030, 1, 31).unwrap(),
            stalled_at: Date::from_ymd(2025, 1, 31).unwrap(),
            step_days: -30,
            frequency: 12,
            days_per_year: 360,
        };
        let msg = err.to_string();
        assert!(msg.contains("2030-01-31"));
        assert!(msg.contains("frequency 12"));
        assert!(msg.contains("360 days per year"));
    }

    #[test]
    fn test_from_conversions() {
        let err: BondError = ParityError::invalid_date("bad").into();
        assert!(matches!(err, BondError::CoreError(_)));

        let err: BondError = CurveError::EmptyCurve.into();
        assert!(matches!(err, BondError::CurveError(CurveError::EmptyCurve)));
    }
}
