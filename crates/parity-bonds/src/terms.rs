//! Fixed-rate bond terms.

use parity_core::Date;
use serde::Serialize;

use crate::conventions::CouponConvention;
use crate::error::{BondError, BondResult};
use crate::schedule::check_dates;

/// Default redemption amount.
pub const DEFAULT_PRINCIPAL: f64 = 100.0;

/// Everything needed to value a plain fixed-rate bond as of a date.
///
/// `maturity` is strictly after `as_of`, the coupon rate (annual, percent)
/// is finite, and the principal is positive, so exactly one cashflow
/// redeems it. Terms are immutable once built.
///
/// # Example
///
/// ```rust
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
/// assert_eq!(terms.principal(), 100.0);
/// assert_eq!(terms.convention().frequency(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondTerms {
    as_of: Date,
    maturity: Date,
    coupon_rate: f64,
    convention: CouponConvention,
    principal: f64,
}

impl BondTerms {
    /// Creates terms with the default principal of 100.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Domain` if `maturity <= as_of` or the coupon rate is
    /// not finite.
    pub fn new(
        as_of: Date,
        maturity: Date,
        coupon_rate: f64,
        convention: CouponConvention,
    ) -> BondResult<Self> {
        Self::with_principal(as_of, maturity, coupon_rate, convention, DEFAULT_PRINCIPAL)
    }

    /// Creates terms with an explicit principal.
    ///
    /// # Errors
    ///
    /// As [`BondTerms::new`], and `BondError::Domain` if the principal is not
    /// positive.
    pub fn with_principal(
        as_of: Date,
        maturity: Date,
        coupon_rate: f64,
        convention: CouponConvention,
        principal: f64,
    ) -> BondResult<Self> {
        check_dates(as_of, maturity)?;
        if !coupon_rate.is_finite() {
            return Err(BondError::domain(
                "coupon_rate",
                format!("must be finite, got {coupon_rate}"),
            ));
        }
        if !(principal.is_finite() && principal > 0.0) {
            return Err(BondError::domain(
                "principal",
                format!("must be positive and finite, got {principal}"),
            ));
        }

        Ok(Self {
            as_of,
            maturity,
            coupon_rate,
            convention,
            principal,
        })
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> BondTermsBuilder {
        BondTermsBuilder::new()
    }

    /// Valuation date.
    #[must_use]
    pub fn as_of(&self) -> Date {
        self.as_of
    }

    /// Maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Annual coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Coupon frequency and day-count basis.
    #[must_use]
    pub fn convention(&self) -> CouponConvention {
        self.convention
    }

    /// Redemption amount paid at maturity.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Returns a copy valued as of a different date.
    pub fn with_as_of(&self, as_of: Date) -> BondResult<Self> {
        Self::with_principal(
            as_of,
            self.maturity,
            self.coupon_rate,
            self.convention,
            self.principal,
        )
    }
}

/// Builder for [`BondTerms`].
#[derive(Debug, Clone, Default)]
pub struct BondTermsBuilder {
    as_of: Option<Date>,
    maturity: Option<Date>,
    coupon_rate: Option<f64>,
    frequency: Option<u32>,
    days_per_year: Option<u32>,
    convention: Option<CouponConvention>,
    principal: Option<f64>,
}

impl BondTermsBuilder {
    /// Creates a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the valuation date.
    #[must_use]
    pub fn as_of(mut self, date: Date) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the annual coupon rate in percent (5.0 = 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: u32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the day-count denominator.
    #[must_use]
    pub fn days_per_year(mut self, days: u32) -> Self {
        self.days_per_year = Some(days);
        self
    }

    /// Sets frequency and day count together.
    ///
    /// Individual `frequency` / `days_per_year` calls override the matching
    /// part of this convention.
    #[must_use]
    pub fn convention(mut self, convention: CouponConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    /// Sets the principal.
    #[must_use]
    pub fn principal(mut self, principal: f64) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Builds the terms.
    ///
    /// # Errors
    ///
    /// Returns `BondError::MissingField` if the as-of date, maturity or
    /// coupon rate is missing, and `BondError::Domain` for invalid values.
    pub fn build(self) -> BondResult<BondTerms> {
        let as_of = self.as_of.ok_or_else(|| BondError::missing_field("as_of"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::missing_field("maturity"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;

        let base = self.convention.unwrap_or_default();
        let convention = CouponConvention::new(
            self.frequency.unwrap_or(base.frequency()),
            self.days_per_year.unwrap_or(base.days_per_year()),
        )?;

        BondTerms::with_principal(
            as_of,
            maturity,
            coupon_rate,
            convention,
            self.principal.unwrap_or(DEFAULT_PRINCIPAL),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let terms = BondTerms::builder()
            .as_of(date(2025, 1, 15))
            .maturity(date(2030, 1, 15))
            .coupon_rate(4.5)
            .build()
            .unwrap();

        assert_eq!(terms.convention(), CouponConvention::default());
        assert_eq!(terms.principal(), DEFAULT_PRINCIPAL);
        assert_eq!(terms.coupon_rate(), 4.5);
    }

    #[test]
    fn test_builder_overrides() {
        let terms = BondTerms::builder()
            .as_of(date(2025, 1, 15))
            .maturity(date(2030, 1, 15))
            .coupon_rate(4.5)
            .convention(CouponConvention::new(4, 360).unwrap())
            .frequency(12)
            .principal(1000.0)
            .build()
            .unwrap();

        assert_eq!(terms.convention().frequency(), 12);
        assert_eq!(terms.convention().days_per_year(), 360);
        assert_eq!(terms.principal(), 1000.0);
    }

    #[test]
    fn test_builder_missing_fields() {
        let err = BondTerms::builder()
            .as_of(date(2025, 1, 15))
            .coupon_rate(4.5)
            .build()
            .unwrap_err();
        assert_eq!(err, BondError::missing_field("maturity"));
    }

    #[test]
    fn test_builder_invalid_frequency() {
        let result = BondTerms::builder()
            .as_of(date(2025, 1, 15))
            .maturity(date(2030, 1, 15))
            .coupon_rate(4.5)
            .frequency(0)
            .build();
        assert!(matches!(result, Err(BondError::Domain { .. })));
    }

    #[test]
    fn test_maturity_must_follow_as_of() {
        let conv = CouponConvention::default();
        assert!(BondTerms::new(date(2025, 1, 15), date(2025, 1, 15), 5.0, conv).is_err());
        assert!(BondTerms::new(date(2025, 1, 16), date(2025, 1, 15), 5.0, conv).is_err());
        assert!(BondTerms::new(date(2025, 1, 14), date(2025, 1, 15), 5.0, conv).is_ok());
    }

    #[test]
    fn test_non_finite_values() {
        let conv = CouponConvention::default();
        let (a, m) = (date(2025, 1, 15), date(2030, 1, 15));
        assert!(BondTerms::new(a, m, f64::NAN, conv).is_err());
        assert!(BondTerms::with_principal(a, m, 5.0, conv, f64::INFINITY).is_err());
    }

    #[test]
    fn test_principal_must_be_positive() {
        let conv = CouponConvention::default();
        let (a, m) = (date(2025, 1, 15), date(2030, 1, 15));

        for principal in [0.0, -100.0] {
            assert!(matches!(
                BondTerms::with_principal(a, m, 5.0, conv, principal),
                Err(BondError::Domain { parameter, .. }) if parameter == "principal"
            ));
        }
        assert!(matches!(
            BondTerms::builder().as_of(a).maturity(m).coupon_rate(5.0).principal(0.0).build(),
            Err(BondError::Domain { .. })
        ));
    }

    #[test]
    fn test_with_as_of() {
        let terms = BondTerms::new(
            date(2025, 1, 15),
            date(2030, 1, 15),
            5.0,
            CouponConvention::default(),
        )
        .unwrap();

        let later = terms.with_as_of(date(2026, 1, 15)).unwrap();
        assert_eq!(later.as_of(), date(2026, 1, 15));
        assert_eq!(later.maturity(), terms.maturity());
        assert!(terms.with_as_of(date(2031, 1, 1)).is_err());
    }
}
