//! Present value at a flat yield.

use crate::cashflows::{vanilla_bond_cashflows, CashflowSchedule};
use crate::error::{BondError, BondResult};
use crate::terms::BondTerms;

use super::discount_factor;

/// Present value of the bond's cashflows at `ytm` percent, compounded
/// annually.
///
/// # Errors
///
/// Returns `BondError::NumericalDomain` if `1 + ytm / 100 <= 0` or the result
/// is not finite, and propagates cashflow generation errors.
///
/// # Example
///
/// ```rust
/// use parity_bonds::pricing::pv_from_yield;
/// use parity_bonds::terms::BondTerms;
/// use parity_core::Date;
///
/// let terms = BondTerms::builder()
///     .as_of(Date::from_ymd(2025, 4, 17).unwrap())
///     .maturity(Date::from_ymd(2048, 9, 25).unwrap())
///     .coupon_rate(5.0)
///     .build()
///     .unwrap();
///
/// // Coupon above yield: premium bond
/// assert!(pv_from_yield(4.0, &terms).unwrap() > 100.0);
/// assert!(pv_from_yield(-150.0, &terms).is_err());
/// ```
pub fn pv_from_yield(ytm: f64, terms: &BondTerms) -> BondResult<f64> {
    let cashflows = vanilla_bond_cashflows(terms)?;
    discount_at_yield(&cashflows, ytm).ok_or_else(|| numerical_domain(ytm, terms))
}

/// Discounts `cashflows` at `ytm`; `None` outside the real domain.
pub(super) fn discount_at_yield(cashflows: &CashflowSchedule, ytm: f64) -> Option<f64> {
    let pv = cashflows
        .iter()
        .map(|cf| discount_factor(ytm, cf.time).map(|df| cf.amount() * df))
        .sum::<Option<f64>>()?;

    pv.is_finite().then_some(pv)
}

pub(super) fn numerical_domain(ytm: f64, terms: &BondTerms) -> BondError {
    BondError::NumericalDomain {
        yield_pct: ytm,
        as_of: terms.as_of(),
        maturity: terms.maturity(),
        coupon_rate: terms.coupon_rate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::CouponConvention;
    use approx::assert_relative_eq;
    use parity_core::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn long_bond(coupon: f64) -> BondTerms {
        BondTerms::new(date(2025, 4, 17), date(2048, 9, 25), coupon, CouponConvention::default())
            .unwrap()
    }

    #[test]
    fn test_premium_and_discount() {
        assert_relative_eq!(pv_from_yield(4.0, &long_bond(5.0)).unwrap(), 116.0669, epsilon = 1e-3);
        assert_relative_eq!(pv_from_yield(4.0, &long_bond(3.0)).unwrap(), 85.5909, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_yield_is_undiscounted_sum() {
        let terms = long_bond(5.0);
        let total = vanilla_bond_cashflows(&terms).unwrap().total_amount();
        assert_relative_eq!(pv_from_yield(0.0, &terms).unwrap(), total, epsilon = 1e-9);
    }

    #[test]
    fn test_annual_par_at_next_coupon() {
        // Annual coupons, coupon == yield: value rolled to the next coupon
        // date is exactly one coupon plus principal.
        let terms = BondTerms::new(
            date(2025, 4, 17),
            date(2030, 9, 25),
            5.0,
            CouponConvention::new(1, 365).unwrap(),
        )
        .unwrap();

        let pv = pv_from_yield(5.0, &terms).unwrap();
        let t0 = 161.0 / 365.0;
        assert_relative_eq!(pv * 1.05_f64.powf(t0), 105.0, max_relative = 1e-9);
    }

    #[test]
    fn test_domain_error_carries_context() {
        let terms = long_bond(5.0);

        for ytm in [-100.0, -150.0, f64::NAN] {
            match pv_from_yield(ytm, &terms) {
                Err(BondError::NumericalDomain {
                    as_of,
                    maturity,
                    coupon_rate,
                    ..
                }) => {
                    assert_eq!(as_of, terms.as_of());
                    assert_eq!(maturity, terms.maturity());
                    assert_eq!(coupon_rate, 5.0);
                }
                other => panic!("expected numerical domain error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_near_total_loss_yield_is_finite() {
        let terms =
            BondTerms::new(date(2027, 5, 20), date(2027, 5, 21), 5.41, CouponConvention::default())
                .unwrap();
        let pv = pv_from_yield(-99.0, &terms).unwrap();
        assert!(pv.is_finite() && pv > 102.705);
    }
}
