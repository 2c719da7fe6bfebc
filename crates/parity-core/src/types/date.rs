//! Date type for bond valuation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{ParityError, ParityResult};

/// A calendar date for bond calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Construction never
/// normalizes silently: [`Date::from_ymd`] rejects days that overflow the
/// month, and [`Date::clamped`] is the one place where an overflowing day is
/// pulled back to the month's last day.
///
/// # Example
///
/// ```rust
/// use parity_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let later = date.add_days(182).unwrap();
/// assert_eq!(later.to_string(), "2025-12-14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `ParityError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> ParityResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| ParityError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date, clamping `day` to the last day of the month when it
    /// overflows (day 31 in April gives April 30, day 30 in a non-leap
    /// February gives February 28).
    ///
    /// # Errors
    ///
    /// Returns `ParityError::InvalidDate` if `month` is outside 1..=12, `day`
    /// is zero, or the year is outside chrono's supported range.
    pub fn clamped(year: i32, month: u32, day: u32) -> ParityResult<Self> {
        if day == 0 {
            return Err(ParityError::invalid_date(format!(
                "{year}-{month:02}-00: day must be at least 1"
            )));
        }

        let max_day = days_in_month(year, month)?;
        if day > max_day {
            log::debug!(
                "day {day} overflows {year}-{month:02}, clamping to {year}-{month:02}-{max_day:02}"
            );
        }

        Self::from_ymd(year, month, day.min(max_day))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `ParityError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> ParityResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| ParityError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns January 1st of the given year.
    ///
    /// # Errors
    ///
    /// Returns `ParityError::InvalidDate` if the year is out of range.
    pub fn start_of_year(year: i32) -> ParityResult<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        month_length(self.year(), self.month())
    }

    /// Moves this date to `day` within the same month, clamping to the
    /// month's last day.
    ///
    /// # Errors
    ///
    /// Returns `ParityError::InvalidDate` if `day` is zero.
    pub fn with_day_clamped(&self, day: u32) -> ParityResult<Self> {
        Self::clamped(self.year(), self.month(), day)
    }

    /// Adds a (possibly negative) number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `ParityError::InvalidDate` if the result is out of range.
    pub fn add_days(&self, days: i64) -> ParityResult<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(Date)
            .ok_or_else(|| ParityError::invalid_date(format!("{self} + {days} days is out of range")))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = ParityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Returns a valid date for `(year, month, day)`, clamping an overflowing
/// day to the last day of the month.
///
/// Free-function form of [`Date::clamped`].
pub fn clamp_day(year: i32, month: u32, day: u32) -> ParityResult<Date> {
    Date::clamped(year, month, day)
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns `ParityError::InvalidDate` if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> ParityResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(ParityError::invalid_date(format!(
            "month {month} is outside 1..=12"
        )));
    }
    Ok(month_length(year, month))
}

/// Checks if a year is a leap year in the proleptic Gregorian calendar.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

// Caller guarantees 1..=12.
fn month_length(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
