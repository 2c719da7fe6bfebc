//! # Parity Core
//!
//! Core types shared by every Parity crate.
//!
//! - **Dates**: [`Date`], a thin wrapper over `chrono::NaiveDate` with the
//!   day-of-month clamping that coupon schedules rely on
//! - **Calendar**: leap-year-aware month lengths ([`days_in_month`])
//! - **Day Counts**: [`ActualFixed`], actual days over a fixed year basis
//! - **Errors**: [`ParityError`] and the [`ParityResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use parity_core::prelude::*;
//!
//! // April has 30 days, so day 31 clamps to the 30th.
//! let date = Date::clamped(2025, 4, 31).unwrap();
//! assert_eq!(date, Date::from_ymd(2025, 4, 30).unwrap());
//!
//! let dc = ActualFixed::new(365).unwrap();
//! let yf = dc.year_fraction(Date::from_ymd(2025, 1, 1).unwrap(), date);
//! assert!(yf > 0.3 && yf < 0.33);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{ActualFixed, DayCount};
    pub use crate::error::{ParityError, ParityResult};
    pub use crate::types::{clamp_day, days_in_month, is_leap_year, Date};
}

// Re-export commonly used types at crate root
pub use daycounts::{ActualFixed, DayCount};
pub use error::{ParityError, ParityResult};
pub use types::{clamp_day, days_in_month, is_leap_year, Date};
