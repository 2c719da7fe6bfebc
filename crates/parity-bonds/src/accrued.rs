//! Accrued interest.
//!
//! Two measures are provided:
//!
//! - [`accrued_interest`]: the full annual coupon rate times the fraction of
//!   a year elapsed since the previous coupon date
//! - [`accrued_interest_per_period`]: the per-period coupon times the
//!   fraction of the current coupon period elapsed, which is the figure a
//!   settlement system would quote
//!
//! For a semi-annual bond the two agree when the coupon period is exactly
//! half of `days_per_year` and differ slightly otherwise.
//!
//! # Example
//!
//! ```rust
//! use parity_bonds::accrued::{accrued_interest, accrued_interest_per_period};
//! use parity_bonds::conventions::CouponConvention;
//! use parity_core::Date;
//!
//! let as_of = Date::from_ymd(2025, 4, 17).unwrap();
//! let maturity = Date::from_ymd(2048, 9, 25).unwrap();
//! let conv = CouponConvention::default();
//!
//! // 23 days since the March 25 coupon
//! let ai = accrued_interest(as_of, maturity, 5.0, conv).unwrap();
//! assert!((ai - 5.0 * 23.0 / 365.0).abs() < 1e-12);
//!
//! // 23 of the 184 days to September 25
//! let ai = accrued_interest_per_period(as_of, maturity, 5.0, conv).unwrap();
//! assert!((ai - 2.5 * 23.0 / 184.0).abs() < 1e-12);
//! ```

use parity_core::{Date, DayCount};

use crate::conventions::CouponConvention;
use crate::error::{BondError, BondResult};
use crate::schedule::{check_dates, next_coupon_date, prev_coupon_date};

/// Accrued interest as `coupon_rate * days(prev_coupon, as_of) / days_per_year`.
///
/// Zero on a coupon date.
///
/// # Errors
///
/// Returns `BondError::Domain` if `maturity <= as_of` or the coupon rate is
/// not finite, and propagates coupon-date lookup failures.
pub fn accrued_interest(
    as_of: Date,
    maturity: Date,
    coupon_rate: f64,
    convention: CouponConvention,
) -> BondResult<f64> {
    check_inputs(as_of, maturity, coupon_rate)?;

    let prev = prev_coupon_date(as_of, maturity, convention)?;
    Ok(coupon_rate * convention.year_fraction(prev, as_of))
}

/// Accrued interest as
/// `coupon_rate / frequency * days(prev, as_of) / days(prev, next)`.
///
/// Zero on a coupon date.
///
/// # Errors
///
/// Returns `BondError::Domain` if `maturity <= as_of` or the coupon rate is
/// not finite, and propagates coupon-date lookup failures.
pub fn accrued_interest_per_period(
    as_of: Date,
    maturity: Date,
    coupon_rate: f64,
    convention: CouponConvention,
) -> BondResult<f64> {
    check_inputs(as_of, maturity, coupon_rate)?;

    let prev = prev_coupon_date(as_of, maturity, convention)?;
    let day_count = convention.day_count();

    let elapsed = day_count.day_count(prev, as_of);
    if elapsed == 0 {
        return Ok(0.0);
    }

    let next = next_coupon_date(as_of, maturity, convention)?;
    let period = day_count.day_count(prev, next);

    Ok(coupon_rate / f64::from(convention.frequency()) * elapsed as f64 / period as f64)
}

fn check_inputs(as_of: Date, maturity: Date, coupon_rate: f64) -> BondResult<()> {
    check_dates(as_of, maturity)?;
    if !coupon_rate.is_finite() {
        return Err(BondError::domain(
            "coupon_rate",
            format!("must be finite, got {coupon_rate}"),
        ));
    }
    Ok(())
}
