//! Price command implementation.
//!
//! Present value of a bond at a flat yield, with accrued interest.

use anyhow::{Context, Result};
use clap::Args;
use parity_bonds::accrued::accrued_interest;
use parity_bonds::config::PricingConfig;
use parity_bonds::pricing::pv_from_yield;
use parity_core::Date;
use serde::Serialize;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_report, KeyValue, Report};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Yield to maturity (as percentage)
    #[arg(short, long = "yield", allow_negative_numbers = true)]
    pub yield_pct: f64,
}

/// Price calculation result.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub as_of: Date,
    pub maturity: Date,
    pub coupon_rate: f64,
    pub frequency: u32,
    pub yield_pct: f64,
    pub present_value: f64,
    pub accrued_interest: f64,
}

impl Report for PriceReport {
    const TITLE: &'static str = "Bond Pricing Results";

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("As Of", self.as_of.to_string()),
            KeyValue::new("Maturity", self.maturity.to_string()),
            KeyValue::new("Coupon", format!("{}%", self.coupon_rate)),
            KeyValue::new("Frequency", self.frequency.to_string()),
            KeyValue::new("Yield (Input)", format!("{}%", self.yield_pct)),
            KeyValue::price("Present Value", self.present_value),
            KeyValue::price("Accrued Interest", self.accrued_interest),
        ]
    }

    fn headline(&self) -> String {
        format!("{:.6}", self.present_value)
    }
}

/// Execute the price command.
pub fn execute(args: PriceArgs, config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let terms = args.bond.terms(config)?;

    let present_value = pv_from_yield(args.yield_pct, &terms)
        .with_context(|| format!("cannot price at {}% yield", args.yield_pct))?;
    let accrued = accrued_interest(
        terms.as_of(),
        terms.maturity(),
        terms.coupon_rate(),
        terms.convention(),
    )
    .context("cannot compute accrued interest")?;

    debug!(present_value, accrued, "priced bond");

    let report = PriceReport {
        as_of: terms.as_of(),
        maturity: terms.maturity(),
        coupon_rate: terms.coupon_rate(),
        frequency: terms.convention().frequency(),
        yield_pct: args.yield_pct,
        present_value,
        accrued_interest: accrued,
    };
    print_report(&report, format)
}
