//! # Parity
//!
//! Fixed-rate bond valuation: coupon schedules, cashflows, present value
//! from a flat yield or a rate curve, yield to maturity, and accrued
//! interest.
//!
//! This crate re-exports the workspace crates under one name:
//!
//! - [`dates`]: dates and day counts
//! - [`math`]: root finding and interpolation
//! - [`curves`]: tenor/rate curves
//! - [`bonds`]: bond terms, schedules and pricing
//!
//! # Example
//!
//! ```rust
//! use parity::prelude::*;
//!
//! let terms = BondTerms::builder()
//!     .as_of(Date::from_ymd(2025, 4, 17).unwrap())
//!     .maturity(Date::from_ymd(2048, 9, 25).unwrap())
//!     .coupon_rate(5.0)
//!     .build()
//!     .unwrap();
//!
//! let price = pv_from_yield(4.0, &terms).unwrap();
//! assert!(price > 100.0);
//!
//! let ytm = ytm_from_price(price, &terms).unwrap();
//! assert!((ytm - 4.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]

pub use parity_bonds as bonds;
pub use parity_core as dates;
pub use parity_curves as curves;
pub use parity_math as math;

/// Everything needed for everyday valuation work.
pub mod prelude {
    pub use parity_bonds::prelude::*;
    pub use parity_core::prelude::*;
    pub use parity_curves::prelude::*;
    pub use parity_math::prelude::*;
}
