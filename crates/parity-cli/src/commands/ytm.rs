//! Yield command implementation.

use anyhow::{Context, Result};
use clap::Args;
use parity_bonds::config::PricingConfig;
use parity_core::Date;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_report, KeyValue, Report};

/// Arguments for the ytm command.
#[derive(Args, Debug)]
pub struct YtmArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Bond price
    #[arg(short, long)]
    pub price: f64,
}

/// Yield calculation result.
#[derive(Debug, Serialize)]
pub struct YtmReport {
    pub as_of: Date,
    pub maturity: Date,
    pub coupon_rate: f64,
    pub price: f64,
    pub yield_pct: f64,
    pub iterations: u32,
    pub residual: f64,
}

impl Report for YtmReport {
    const TITLE: &'static str = "Yield to Maturity";

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("As Of", self.as_of.to_string()),
            KeyValue::new("Maturity", self.maturity.to_string()),
            KeyValue::new("Coupon", format!("{}%", self.coupon_rate)),
            KeyValue::price("Price (Input)", self.price),
            KeyValue::percent("Yield to Maturity", self.yield_pct),
            KeyValue::new("Iterations", self.iterations.to_string()),
            KeyValue::new("Residual", format!("{:e}", self.residual)),
        ]
    }

    fn headline(&self) -> String {
        format!("{:.6}", self.yield_pct)
    }
}

/// Execute the ytm command.
pub fn execute(args: YtmArgs, config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let terms = args.bond.terms(config)?;
    let solver = config.ytm_solver()?;

    let result = solver
        .solve(args.price, &terms)
        .with_context(|| format!("cannot solve for yield at price {}", args.price))?;

    let report = YtmReport {
        as_of: terms.as_of(),
        maturity: terms.maturity(),
        coupon_rate: terms.coupon_rate(),
        price: args.price,
        yield_pct: result.yield_value,
        iterations: result.iterations,
        residual: result.residual,
    };
    print_report(&report, format)
}
