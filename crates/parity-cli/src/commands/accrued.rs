//! Accrued interest command implementation.

use anyhow::{Context, Result};
use clap::Args;
use parity_bonds::accrued::{accrued_interest, accrued_interest_per_period};
use parity_bonds::config::PricingConfig;
use parity_bonds::schedule::{next_coupon_date, prev_coupon_date};
use parity_core::Date;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_report, KeyValue, Report};

/// Arguments for the accrued command.
#[derive(Args, Debug)]
pub struct AccruedArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// Accrued interest result.
#[derive(Debug, Serialize)]
pub struct AccruedReport {
    pub as_of: Date,
    pub previous_coupon: Date,
    pub next_coupon: Date,
    /// Annual coupon times years since the previous coupon.
    pub accrued_interest: f64,
    /// Period coupon times the fraction of the current period elapsed.
    pub accrued_interest_per_period: f64,
}

impl Report for AccruedReport {
    const TITLE: &'static str = "Accrued Interest";

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("As Of", self.as_of.to_string()),
            KeyValue::new("Previous Coupon", self.previous_coupon.to_string()),
            KeyValue::new("Next Coupon", self.next_coupon.to_string()),
            KeyValue::price("Accrued (Annual Rate)", self.accrued_interest),
            KeyValue::price("Accrued (Per Period)", self.accrued_interest_per_period),
        ]
    }

    fn headline(&self) -> String {
        format!("{:.6}", self.accrued_interest)
    }
}

/// Execute the accrued command.
pub fn execute(args: AccruedArgs, config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let terms = args.bond.terms(config)?;
    let (as_of, maturity, rate, conv) = (
        terms.as_of(),
        terms.maturity(),
        terms.coupon_rate(),
        terms.convention(),
    );

    let report = AccruedReport {
        as_of,
        previous_coupon: prev_coupon_date(as_of, maturity, conv)
            .context("cannot find the previous coupon date")?,
        next_coupon: next_coupon_date(as_of, maturity, conv)
            .context("cannot find the next coupon date")?,
        accrued_interest: accrued_interest(as_of, maturity, rate, conv)?,
        accrued_interest_per_period: accrued_interest_per_period(as_of, maturity, rate, conv)?,
    };
    print_report(&report, format)
}
