//! Bond valuation.
//!
//! - [`pv_from_yield`]: present value at a flat annual yield
//! - [`pv_from_curve`] / [`pv_from_curve_with_principal`]: present value with
//!   each cashflow discounted at the curve rate for its time
//! - [`YtmSolver`] / [`ytm_from_price`]: yield that reproduces a price
//!
//! All of them value the output of
//! [`vanilla_bond_cashflows`](crate::cashflows::vanilla_bond_cashflows), and
//! all discount with annual compounding: a payment at `t` years is worth
//! `amount * (1 + rate / 100)^-t` today.

mod curve;
mod yield_pv;
mod ytm;

pub use curve::{pv_from_curve, pv_from_curve_with_principal};
pub use yield_pv::pv_from_yield;
pub use ytm::{
    ytm_from_price, YieldResult, YtmSolver, YTM_INITIAL_GUESS, YTM_MAX_ITERATIONS, YTM_TOLERANCE,
};

/// Annual-compounding discount factor for `rate` percent over `time` years.
///
/// `None` when `1 + rate / 100` is not positive, where the factor has no real
/// value for fractional `time`.
fn discount_factor(rate: f64, time: f64) -> Option<f64> {
    let base = 1.0 + rate / 100.0;
    (base > 0.0).then(|| base.powf(-time))
}
