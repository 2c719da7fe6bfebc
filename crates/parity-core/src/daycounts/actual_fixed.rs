//! Actual/fixed-basis day count.

use serde::{Deserialize, Serialize};

use super::DayCount;
use crate::error::{ParityError, ParityResult};
use crate::types::Date;

/// Default year basis.
pub const DEFAULT_DAYS_PER_YEAR: u32 = 365;

/// Actual/N day count convention.
///
/// The day count is the actual number of days between dates and the year
/// basis is a fixed `days_per_year`, ignoring leap years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{\text{days\_per\_year}}$$
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActualFixed {
    days_per_year: u32,
}

impl ActualFixed {
    /// Creates a day count with the given year basis.
    ///
    /// # Errors
    ///
    /// Returns `ParityError::DayCountError` if `days_per_year` is zero.
    pub fn new(days_per_year: u32) -> ParityResult<Self> {
        if days_per_year == 0 {
            return Err(ParityError::day_count("days_per_year must be positive"));
        }
        Ok(Self { days_per_year })
    }

    /// ACT/365 Fixed.
    #[must_use]
    pub fn act_365() -> Self {
        Self {
            days_per_year: DEFAULT_DAYS_PER_YEAR,
        }
    }

    /// Returns the year basis.
    #[must_use]
    pub fn days_per_year(&self) -> u32 {
        self.days_per_year
    }

    /// Converts a day count into a year fraction.
    #[must_use]
    pub fn days_to_years(&self, days: i64) -> f64 {
        days as f64 / f64::from(self.days_per_year)
    }
}

impl Default for ActualFixed {
    fn default() -> Self {
        Self::act_365()
    }
}

impl DayCount for ActualFixed {
    fn name(&self) -> String {
        format!("ACT/{}", self.days_per_year)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.days_to_years(start.days_between(&end))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act365_basic() {
        let dc = ActualFixed::act_365();
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 7, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 181);
        assert_relative_eq!(dc.year_fraction(start, end), 181.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_leap_year_ignored() {
        let dc = ActualFixed::act_365();
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        // 366 actual days over a 365-day basis
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_custom_basis() {
        let dc = ActualFixed::new(360).unwrap();
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 31).unwrap();

        assert_eq!(dc.name(), "ACT/360");
        assert_relative_eq!(dc.year_fraction(start, end), 30.0 / 360.0, epsilon = 1e-15);
        assert_relative_eq!(dc.year_fraction(end, start), -30.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_basis_rejected() {
        assert!(ActualFixed::new(0).is_err());
    }

    #[test]
    fn test_default_is_act365() {
        assert_eq!(ActualFixed::default().days_per_year(), 365);
        assert_eq!(ActualFixed::default().name(), "ACT/365");
    }
}
