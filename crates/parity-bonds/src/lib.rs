//! # Parity Bonds
//!
//! Valuation of plain fixed-rate bonds.
//!
//! This crate provides:
//!
//! - **Terms**: [`BondTerms`] and the [`CouponConvention`] (frequency and
//!   `Actual/days_per_year` basis) they carry
//! - **Schedules**: coupon dates anchored to the maturity's month and day,
//!   and the previous/next coupon around a date
//! - **Cash Flows**: remaining coupons and principal as year-fraction-timed
//!   payments
//! - **Pricing**: present value at a flat yield or on a rate curve, and
//!   yield-to-maturity from price
//! - **Accrued Interest** and straight-line **Amortization**
//!
//! ## Example
//!
//! ```rust
//! use parity_bonds::prelude::*;
//! use parity_core::Date;
//!
//! let terms = BondTerms::builder()
//!     .as_of(Date::from_ymd(2025, 4, 17).unwrap())
//!     .maturity(Date::from_ymd(2048, 9, 25).unwrap())
//!     .coupon_rate(5.0)
//!     .build()
//!     .unwrap();
//!
//! let price = pv_from_yield(4.0, &terms).unwrap();
//! let ytm = ytm_from_price(price, &terms).unwrap();
//! assert!((ytm - 4.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod accrued;
pub mod amortization;
pub mod cashflows;
pub mod config;
pub mod conventions;
pub mod error;
pub mod pricing;
pub mod schedule;
pub mod terms;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrued::{accrued_interest, accrued_interest_per_period};
    pub use crate::amortization::{linear_amortization_schedule, LinearAmortization};
    pub use crate::cashflows::{vanilla_bond_cashflows, Cashflow, CashflowSchedule};
    pub use crate::config::{PricingConfig, SolverSettings};
    pub use crate::conventions::CouponConvention;
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{
        pv_from_curve, pv_from_curve_with_principal, pv_from_yield, ytm_from_price, YieldResult,
        YtmSolver,
    };
    pub use crate::schedule::{coupon_dates_for_years, next_coupon_date, prev_coupon_date};
    pub use crate::terms::{BondTerms, BondTermsBuilder};
}

pub use conventions::CouponConvention;
pub use error::{BondError, BondResult};
pub use terms::BondTerms;
