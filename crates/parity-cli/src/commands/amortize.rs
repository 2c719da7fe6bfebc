//! Amortization command implementation.

use anyhow::{Context, Result};
use clap::Args;
use parity_bonds::amortization::linear_amortization_schedule;
use parity_core::Date;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::output::{print_report, KeyValue, Report};

/// Arguments for the amortize command.
#[derive(Args, Debug)]
pub struct AmortizeArgs {
    /// Book price at purchase
    #[arg(short, long)]
    pub book_price: f64,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub maturity: Date,

    /// Purchase date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub purchase: Date,

    /// Period length in years (0.5 for semi-annual)
    #[arg(long)]
    pub period_years: f64,

    /// Redemption value the book price converges to
    #[arg(long, default_value_t = 100.0)]
    pub par: f64,
}

/// Amortization result.
#[derive(Debug, Serialize)]
pub struct AmortizeReport {
    pub purchase: Date,
    pub maturity: Date,
    pub initial_book_price: f64,
    pub par: f64,
    pub total_periods: u32,
    pub change_per_period: f64,
}

impl Report for AmortizeReport {
    const TITLE: &'static str = "Linear Amortization";

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("Purchase", self.purchase.to_string()),
            KeyValue::new("Maturity", self.maturity.to_string()),
            KeyValue::price("Book Price", self.initial_book_price),
            KeyValue::price("Par", self.par),
            KeyValue::new("Periods", self.total_periods.to_string()),
            KeyValue::price("Change per Period", self.change_per_period),
        ]
    }

    fn headline(&self) -> String {
        format!("{:.6}", self.change_per_period)
    }
}

/// Execute the amortize command.
pub fn execute(args: AmortizeArgs, format: OutputFormat) -> Result<()> {
    let schedule = linear_amortization_schedule(
        args.book_price,
        args.maturity,
        args.purchase,
        args.period_years,
        args.par,
    )
    .with_context(|| {
        format!(
            "cannot amortize from {} to {} in {}-year periods",
            args.purchase, args.maturity, args.period_years
        )
    })?;

    let report = AmortizeReport {
        purchase: args.purchase,
        maturity: args.maturity,
        initial_book_price: schedule.initial_book_price,
        par: args.par,
        total_periods: schedule.total_periods,
        change_per_period: schedule.change_per_period,
    };
    print_report(&report, format)
}
