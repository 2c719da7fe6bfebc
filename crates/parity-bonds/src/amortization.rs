//! Straight-line amortization of book price toward par.

use parity_core::daycounts::{ActualFixed, DayCount};
use parity_core::Date;
use serde::Serialize;

use crate::error::{BondError, BondResult};

/// A straight-line path from the purchase book price to par.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearAmortization {
    /// Whole periods between purchase and maturity.
    pub total_periods: u32,
    /// Book price change per period; negative for a premium bond.
    pub change_per_period: f64,
    /// Book price at purchase.
    pub initial_book_price: f64,
}

impl LinearAmortization {
    /// Book price after `period` periods.
    #[must_use]
    pub fn book_price_after(&self, period: u32) -> f64 {
        self.initial_book_price + f64::from(period.min(self.total_periods)) * self.change_per_period
    }
}

/// Splits the gap between `initial_book_price` and `par` evenly over the
/// whole periods from `purchase_date` to `maturity`.
///
/// Years are counted as actual days over 365; partial periods are dropped.
///
/// # Errors
///
/// Returns `BondError::Domain` if `period_length_years` is not positive, or if
/// no whole period fits before maturity.
///
/// # Example
///
/// ```rust
/// use parity_bonds::amortization::linear_amortization_schedule;
/// use parity_core::Date;
///
/// let schedule = linear_amortization_schedule(
///     95.0,
///     Date::from_ymd(2025, 1, 1).unwrap(),
///     Date::from_ymd(2020, 1, 1).unwrap(),
///     1.0,
///     100.0,
/// )
/// .unwrap();
///
/// assert_eq!(schedule.total_periods, 5);
/// assert!((schedule.change_per_period - 1.0).abs() < 1e-12);
/// ```
pub fn linear_amortization_schedule(
    initial_book_price: f64,
    maturity: Date,
    purchase_date: Date,
    period_length_years: f64,
    par: f64,
) -> BondResult<LinearAmortization> {
    if !(period_length_years.is_finite() && period_length_years > 0.0) {
        return Err(BondError::domain(
            "period_length_years",
            format!("must be positive, got {period_length_years}"),
        ));
    }

    let total_years = ActualFixed::act_365().year_fraction(purchase_date, maturity);
    let periods = (total_years / period_length_years).trunc();

    if periods < 1.0 {
        return Err(BondError::domain(
            "maturity",
            format!(
                "{maturity} leaves no whole {period_length_years}-year period after {purchase_date}; \
                 the bond is at or past maturity or the period is too long"
            ),
        ));
    }

    let total_periods = periods.min(f64::from(u32::MAX)) as u32;

    Ok(LinearAmortization {
        total_periods,
        change_per_period: (par - initial_book_price) / f64::from(total_periods),
        initial_book_price,
    })
}
