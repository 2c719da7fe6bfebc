//! Present value from a rate curve.

use parity_curves::RateCurve;

use crate::cashflows::{vanilla_bond_cashflows, Cashflow};
use crate::error::BondResult;
use crate::terms::BondTerms;

use super::discount_factor;
use super::yield_pv::numerical_domain;

/// Present value of the coupon payments, each discounted at the curve rate
/// for its time.
///
/// Principal is not included; use [`pv_from_curve_with_principal`] for the
/// full bond value.
///
/// # Errors
///
/// Returns `BondError::NumericalDomain` if a curve rate gives a non-positive
/// discount base, and propagates cashflow and curve errors.
pub fn pv_from_curve(terms: &BondTerms, curve: &RateCurve) -> BondResult<f64> {
    discount_on_curve(terms, curve, |cf| cf.coupon)
}

/// Present value of every payment, coupons and principal, discounted on the
/// curve.
///
/// # Example
///
/// ```rust
/// use parity_bonds::pricing::{pv_from_curve, pv_from_curve_with_principal, pv_from_yield};
/// use parity_bonds::terms::BondTerms;
/// use parity_core::Date;
/// use parity_curves::RateCurve;
///
/// let terms = BondTerms::builder()
///     .as_of(Date::from_ymd(2025, 4, 17).unwrap())
///     .maturity(Date::from_ymd(2030, 9, 25).unwrap())
///     .coupon_rate(4.5)
///     .build()
///     .unwrap();
///
/// // A flat curve matches flat-yield discounting.
/// let flat = RateCurve::from_pairs(&[(1.0, 4.0)]).unwrap();
/// let full = pv_from_curve_with_principal(&terms, &flat).unwrap();
/// assert!((full - pv_from_yield(4.0, &terms).unwrap()).abs() < 1e-9);
/// assert!(pv_from_curve(&terms, &flat).unwrap() < full);
/// ```
pub fn pv_from_curve_with_principal(terms: &BondTerms, curve: &RateCurve) -> BondResult<f64> {
    discount_on_curve(terms, curve, Cashflow::amount)
}

fn discount_on_curve<F>(terms: &BondTerms, curve: &RateCurve, payment: F) -> BondResult<f64>
where
    F: Fn(&Cashflow) -> f64,
{
    let cashflows = vanilla_bond_cashflows(terms)?;

    let mut pv = 0.0;
    for cf in &cashflows {
        let rate = curve.rate_at(cf.time)?;
        let df = discount_factor(rate, cf.time).ok_or_else(|| numerical_domain(rate, terms))?;
        pv += payment(cf) * df;
    }

    Ok(pv)
}
