//! Coupon date generation and lookup.
//!
//! Coupon dates are anchored to the maturity's month and day. Starting from
//! that anchor in the latest requested year, the generator walks backward and
//! forward in steps of `days_per_year / frequency` calendar days, re-anchoring
//! each stepped date to the maturity's day-of-month (clamped to the length of
//! the month it lands in).
//!
//! Because the step is a fixed number of days, a schedule can drift relative
//! to the calendar: a monthly schedule stepping 30 days from January 31 lands
//! on March 2 and re-anchors to March 31, skipping February.

use std::collections::BTreeSet;

use log::debug;
use parity_core::Date;

use crate::conventions::CouponConvention;
use crate::error::{BondError, BondResult};

/// How many times [`next_coupon_date`] may roll into the following year.
///
/// Every year's schedule contains the maturity anniversary, so one roll
/// always suffices for a well-formed convention.
const MAX_YEAR_ROLLS: u32 = 4;

/// Direction of a schedule walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Backward,
    Forward,
}

/// Generates the coupon dates falling in `years`, sorted ascending.
///
/// # Errors
///
/// - `BondError::Domain` if `years` is empty or if `frequency` exceeds
///   `days_per_year` (a zero-day step)
/// - `BondError::ScheduleStalled` if a step fails to move past the previous
///   date once re-anchored to the maturity's day (monthly coupons maturing on
///   the 1st, or on the 31st with a 360-day year)
/// - `BondError::CoreError` if the walk leaves the supported date range
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeSet;
///
/// use parity_bonds::conventions::CouponConvention;
/// use parity_bonds::schedule::coupon_dates_for_years;
/// use parity_core::Date;
///
/// let maturity = Date::from_ymd(2048, 9, 25).unwrap();
/// let dates = coupon_dates_for_years(
///     maturity,
///     &BTreeSet::from([2025]),
///     CouponConvention::default(),
/// )
/// .unwrap();
///
/// assert_eq!(
///     dates,
///     vec![
///         Date::from_ymd(2025, 3, 25).unwrap(),
///         Date::from_ymd(2025, 9, 25).unwrap(),
///     ]
/// );
/// ```
pub fn coupon_dates_for_years(
    maturity: Date,
    years: &BTreeSet<i32>,
    convention: CouponConvention,
) -> BondResult<Vec<Date>> {
    let Some(&last_year) = years.last() else {
        return Err(BondError::domain("years", "must contain at least one year"));
    };

    if convention.forward_step_days() == 0 {
        return Err(BondError::domain(
            "frequency",
            format!(
                "{} coupons per year exceeds {} days per year",
                convention.frequency(),
                convention.days_per_year()
            ),
        ));
    }

    let anchor = Date::clamped(last_year, maturity.month(), maturity.day())?;

    let mut dates = BTreeSet::from([anchor]);
    for walk in [Walk::Backward, Walk::Forward] {
        let step = match walk {
            Walk::Backward => -convention.backward_step_days(),
            Walk::Forward => convention.forward_step_days(),
        };

        let mut current = anchor;
        loop {
            let next = current.add_days(step)?.with_day_clamped(maturity.day())?;

            let advanced = match walk {
                Walk::Backward => next < current,
                Walk::Forward => next > current,
            };
            if !advanced {
                return Err(BondError::ScheduleStalled {
                    maturity,
                    stalled_at: current,
                    step_days: step,
                    frequency: convention.frequency(),
                    days_per_year: convention.days_per_year(),
                });
            }

            if !years.contains(&next.year()) {
                break;
            }
            dates.insert(next);
            current = next;
        }
    }

    Ok(dates.into_iter().collect())
}

/// Rejects a maturity at or before the as-of date.
pub(crate) fn check_dates(as_of: Date, maturity: Date) -> BondResult<()> {
    if maturity <= as_of {
        return Err(BondError::domain(
            "maturity",
            format!("{maturity} must be after as-of date {as_of}"),
        ));
    }
    Ok(())
}

/// Returns the first coupon date on or after `as_of`.
///
/// Searches the schedule for `as_of`'s year; if every coupon in that year is
/// already past, searches again from January 1 of the following year.
///
/// # Errors
///
/// Returns `BondError::Domain` if `maturity <= as_of`,
/// `BondError::ScheduleExhausted` if no coupon is found within a bounded
/// number of year rolls, or any error from [`coupon_dates_for_years`].
///
/// # Example
///
/// ```rust
/// use parity_bonds::conventions::CouponConvention;
/// use parity_bonds::schedule::next_coupon_date;
/// use parity_core::Date;
///
/// let next = next_coupon_date(
///     Date::from_ymd(2025, 12, 31).unwrap(),
///     Date::from_ymd(2048, 9, 25).unwrap(),
///     CouponConvention::default(),
/// )
/// .unwrap();
/// assert_eq!(next, Date::from_ymd(2026, 3, 25).unwrap());
/// ```
pub fn next_coupon_date(
    as_of: Date,
    maturity: Date,
    convention: CouponConvention,
) -> BondResult<Date> {
    check_dates(as_of, maturity)?;

    let mut from = as_of;

    for _ in 0..=MAX_YEAR_ROLLS {
        let dates = coupon_dates_for_years(maturity, &BTreeSet::from([from.year()]), convention)?;
        if let Some(&next) = dates.iter().find(|&&d| d >= from) {
            return Ok(next);
        }

        let rolled = Date::start_of_year(from.year() + 1)?;
        debug!("no coupon on or after {from} in {}, continuing from {rolled}", from.year());
        from = rolled;
    }

    Err(exhausted(as_of, maturity, convention))
}

/// Returns the last coupon date on or before `as_of`, searching `as_of`'s
/// year and the year before.
///
/// # Errors
///
/// Returns `BondError::Domain` if `maturity <= as_of`,
/// `BondError::ScheduleExhausted` if neither year has a coupon on or before
/// `as_of`, or any error from [`coupon_dates_for_years`].
pub fn prev_coupon_date(
    as_of: Date,
    maturity: Date,
    convention: CouponConvention,
) -> BondResult<Date> {
    check_dates(as_of, maturity)?;

    let years = BTreeSet::from([as_of.year() - 1, as_of.year()]);

    coupon_dates_for_years(maturity, &years, convention)?
        .into_iter()
        .rev()
        .find(|&d| d <= as_of)
        .ok_or_else(|| exhausted(as_of, maturity, convention))
}

fn exhausted(as_of: Date, maturity: Date, convention: CouponConvention) -> BondError {
    BondError::ScheduleExhausted {
        as_of,
        maturity,
        frequency: convention.frequency(),
        days_per_year: convention.days_per_year(),
    }
}
