//! CLI command implementations.

pub mod accrued;
pub mod amortize;
pub mod curve_pv;
pub mod price;
pub mod schedule;
pub mod ytm;

pub use accrued::AccruedArgs;
pub use amortize::AmortizeArgs;
pub use curve_pv::CurvePvArgs;
pub use price::PriceArgs;
pub use schedule::ScheduleArgs;
pub use ytm::YtmArgs;

use anyhow::{Context, Result};
use clap::Args;
use parity_bonds::config::PricingConfig;
use parity_bonds::{BondTerms, CouponConvention};
use parity_core::Date;
use parity_curves::RateCurve;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a curve written as comma-separated `tenor:rate` pairs.
pub fn parse_curve(s: &str) -> CliResult<RateCurve> {
    s.parse::<RateCurve>().map_err(|e| CliError::InvalidCurve {
        input: s.to_string(),
        reason: e.to_string(),
    })
}

/// Coupon convention overrides. Anything not given comes from the
/// configuration file, then from the library defaults.
#[derive(Args, Debug)]
pub struct ConventionArgs {
    /// Coupons per year: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long)]
    pub frequency: Option<u32>,

    /// Day-count denominator (Actual/N)
    #[arg(long)]
    pub days_per_year: Option<u32>,

    /// Redemption amount
    #[arg(long)]
    pub principal: Option<f64>,
}

impl ConventionArgs {
    /// Resolves the coupon convention against the configuration.
    pub fn convention(&self, config: &PricingConfig) -> Result<CouponConvention> {
        let frequency = self.frequency.unwrap_or(config.frequency);
        let days_per_year = self.days_per_year.unwrap_or(config.days_per_year);

        CouponConvention::new(frequency, days_per_year).with_context(|| {
            format!("invalid convention: frequency {frequency}, {days_per_year} days per year")
        })
    }

    /// Builds bond terms from the dates and coupon plus these overrides.
    pub fn terms(
        &self,
        as_of: Date,
        maturity: Date,
        coupon_rate: f64,
        config: &PricingConfig,
    ) -> Result<BondTerms> {
        BondTerms::builder()
            .as_of(as_of)
            .maturity(maturity)
            .coupon_rate(coupon_rate)
            .convention(self.convention(config)?)
            .principal(self.principal.unwrap_or(config.principal))
            .build()
            .with_context(|| {
                format!("invalid bond: {coupon_rate}% maturing {maturity}, as of {as_of}")
            })
    }
}

/// The arguments that identify a bond.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub maturity: Date,

    /// Valuation date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub as_of: Date,

    #[command(flatten)]
    pub convention: ConventionArgs,
}

impl BondArgs {
    /// Builds the bond terms.
    pub fn terms(&self, config: &PricingConfig) -> Result<BondTerms> {
        self.convention
            .terms(self.as_of, self.maturity, self.coupon, config)
    }
}
