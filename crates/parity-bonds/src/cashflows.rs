//! Cashflow generation for fixed-rate bonds.

use serde::Serialize;

use crate::error::BondResult;
use crate::schedule::next_coupon_date;
use crate::terms::BondTerms;

/// A single payment, positioned by its year fraction from the as-of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cashflow {
    /// Years from the as-of date.
    pub time: f64,
    /// Coupon amount.
    pub coupon: f64,
    /// Principal amount; zero except on the final payment.
    pub principal: f64,
}

impl Cashflow {
    /// Creates a coupon-only cashflow.
    #[must_use]
    pub fn coupon(time: f64, coupon: f64) -> Self {
        Self {
            time,
            coupon,
            principal: 0.0,
        }
    }

    /// Total payment.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.coupon + self.principal
    }

    /// Returns true if this payment redeems principal.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.principal != 0.0
    }
}

/// Ordered cashflows with strictly increasing times.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CashflowSchedule {
    cashflows: Vec<Cashflow>,
}

impl CashflowSchedule {
    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cashflows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a cashflow to the schedule.
    pub fn push(&mut self, cf: Cashflow) {
        self.cashflows.push(cf);
    }

    /// Returns the cashflows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Cashflow] {
        &self.cashflows
    }

    /// Returns an iterator over the cashflows.
    pub fn iter(&self) -> std::slice::Iter<'_, Cashflow> {
        self.cashflows.iter()
    }

    /// Number of cashflows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cashflows.len()
    }

    /// Returns true if the schedule is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cashflows.is_empty()
    }

    /// The final cashflow, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Cashflow> {
        self.cashflows.last()
    }

    /// Sum of all undiscounted payments.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.cashflows.iter().map(Cashflow::amount).sum()
    }
}

impl<'a> IntoIterator for &'a CashflowSchedule {
    type Item = &'a Cashflow;
    type IntoIter = std::slice::Iter<'a, Cashflow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cashflows.iter()
    }
}

/// Generates the remaining cashflows of a plain fixed-rate bond.
///
/// The first coupon falls on the next coupon date on or after the as-of
/// date, at `t0 = days(as_of, next) / days_per_year`. A further
/// `floor(days(next, maturity) / days_per_year * frequency)` coupons follow at
/// intervals of `1 / frequency` years. Each coupon pays
/// `coupon_rate / frequency`; the last one also carries the principal.
///
/// # Errors
///
/// Propagates coupon-date lookup failures.
///
/// # Example
///
/// ```rust
/// use parity_bonds::cashflows::vanilla_bond_cashflows;
/// use parity_bonds::terms::BondTerms;
/// use parity_core::Date;
///
/// let terms = BondTerms::builder()
///     .as_of(Date::from_ymd(2025, 4, 17).unwrap())
///     .maturity(Date::from_ymd(2027, 9, 25).unwrap())
///     .coupon_rate(5.0)
///     .build()
///     .unwrap();
///
/// let flows = vanilla_bond_cashflows(&terms).unwrap();
/// assert_eq!(flows.len(), 5);
/// assert_eq!(flows.last().unwrap().amount(), 102.5);
/// ```
pub fn vanilla_bond_cashflows(terms: &BondTerms) -> BondResult<CashflowSchedule> {
    let convention = terms.convention();
    let next = next_coupon_date(terms.as_of(), terms.maturity(), convention)?;

    let frequency = f64::from(convention.frequency());
    let periods = (convention.year_fraction(next, terms.maturity()) * frequency)
        .floor()
        .max(0.0) as usize;
    let t0 = convention.year_fraction(terms.as_of(), next);
    let coupon = terms.coupon_rate() / frequency;

    let mut schedule = CashflowSchedule::with_capacity(periods + 1);
    for period in 0..=periods {
        schedule.push(Cashflow::coupon(t0 + period as f64 / frequency, coupon));
    }
    if let Some(last) = schedule.cashflows.last_mut() {
        last.principal = terms.principal();
    }

    Ok(schedule)
}
