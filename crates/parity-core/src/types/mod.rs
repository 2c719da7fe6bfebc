//! Domain types for bond valuation.
//!
//! - [`Date`]: Calendar date with day-of-month clamping
//! - [`days_in_month`]: Month-length lookup used by the clamp

mod date;

pub use date::{clamp_day, days_in_month, is_leap_year, Date};
