//! Day count conventions for bond calculations.
//!
//! Parity works with a single family: actual calendar days divided by a
//! fixed year basis (`days_per_year`, 365 for ACT/365 Fixed). Coupon
//! schedules, cashflow times and accrued interest all go through
//! [`ActualFixed`].
//!
//! # Usage
//!
//! ```rust
//! use parity_core::daycounts::{ActualFixed, DayCount};
//! use parity_core::types::Date;
//!
//! let dc = ActualFixed::act_365();
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 181);
//! assert!((dc.year_fraction(start, end) - 181.0 / 365.0).abs() < 1e-15);
//! ```

mod actual_fixed;

pub use actual_fixed::{ActualFixed, DEFAULT_DAYS_PER_YEAR};

use crate::types::Date;

/// Trait for day count conventions.
///
/// # Implementation Notes
///
/// - `year_fraction` returns the fraction of a year between dates
/// - `day_count` returns the number of days according to the convention
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g. "ACT/365").
    fn name(&self) -> String;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
