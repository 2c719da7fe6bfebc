//! Coupon frequency and day-count basis.

use parity_core::daycounts::{ActualFixed, DayCount};
use parity_core::Date;
use serde::Serialize;

use crate::error::{BondError, BondResult};

/// Default number of coupons per year.
pub const DEFAULT_FREQUENCY: u32 = 2;

/// How often a bond pays and how calendar days convert to years.
///
/// Year fractions are `Actual/days_per_year`. One coupon period spans
/// `days_per_year / frequency` days.
///
/// # Example
///
/// ```rust
/// use parity_bonds::conventions::CouponConvention;
///
/// let conv = CouponConvention::new(4, 365).unwrap();
/// assert_eq!(conv.forward_step_days(), 91);
/// assert_eq!(conv.backward_step_days(), 92);
/// assert!(CouponConvention::new(0, 365).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CouponConvention {
    frequency: u32,
    day_count: ActualFixed,
}

impl CouponConvention {
    /// Creates a convention with `frequency` coupons per year and a
    /// `days_per_year` day-count denominator.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Domain` naming the parameter if either is zero.
    pub fn new(frequency: u32, days_per_year: u32) -> BondResult<Self> {
        if frequency == 0 {
            return Err(BondError::domain("frequency", "must be at least 1"));
        }
        if days_per_year == 0 {
            return Err(BondError::domain("days_per_year", "must be at least 1"));
        }

        Ok(Self {
            frequency,
            day_count: ActualFixed::new(days_per_year)?,
        })
    }

    /// Coupons per year.
    #[must_use]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Day-count denominator.
    #[must_use]
    pub fn days_per_year(&self) -> u32 {
        self.day_count.days_per_year()
    }

    /// The underlying day count.
    #[must_use]
    pub fn day_count(&self) -> &ActualFixed {
        &self.day_count
    }

    /// Calendar days moved by one forward schedule step,
    /// `floor(days_per_year / frequency)`.
    #[must_use]
    pub fn forward_step_days(&self) -> i64 {
        i64::from(self.days_per_year() / self.frequency)
    }

    /// Calendar days moved by one backward schedule step,
    /// `ceil(days_per_year / frequency)`.
    #[must_use]
    pub fn backward_step_days(&self) -> i64 {
        i64::from(self.days_per_year().div_ceil(self.frequency))
    }

    /// Year fraction between two dates (negative if `end` is before `start`).
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count.year_fraction(start, end)
    }

    /// Length of one coupon period in years.
    #[must_use]
    pub fn period_years(&self) -> f64 {
        1.0 / f64::from(self.frequency)
    }
}

impl Default for CouponConvention {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            day_count: ActualFixed::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_semi_annual_act_365() {
        let conv = CouponConvention::default();
        assert_eq!(conv.frequency(), 2);
        assert_eq!(conv.days_per_year(), 365);
        assert_eq!(conv.day_count().name(), "ACT/365");
    }

    #[test]
    fn test_rejects_zero_parameters() {
        assert_eq!(
            CouponConvention::new(0, 365),
            Err(BondError::domain("frequency", "must be at least 1"))
        );
        assert!(matches!(
            CouponConvention::new(2, 0),
            Err(BondError::Domain { parameter, .. }) if parameter == "days_per_year"
        ));
    }

    #[test]
    fn test_step_days() {
        let semi = CouponConvention::new(2, 365).unwrap();
        assert_eq!(semi.forward_step_days(), 182);
        assert_eq!(semi.backward_step_days(), 183);

        let annual = CouponConvention::new(1, 365).unwrap();
        assert_eq!(annual.forward_step_days(), 365);
        assert_eq!(annual.backward_step_days(), 365);

        let monthly = CouponConvention::new(12, 360).unwrap();
        assert_eq!(monthly.forward_step_days(), 30);
        assert_eq!(monthly.backward_step_days(), 30);
    }

    #[test]
    fn test_year_fraction() {
        let conv = CouponConvention::new(2, 365).unwrap();
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert_relative_eq!(conv.year_fraction(start, end), 1.0);
        assert_relative_eq!(conv.period_years(), 0.5);
    }
}
