//! Schedule command implementation.
//!
//! Shows the coupon dates around the as-of date and every remaining
//! cashflow.

use anyhow::{Context, Result};
use clap::Args;
use parity_bonds::cashflows::{vanilla_bond_cashflows, CashflowSchedule};
use parity_bonds::config::PricingConfig;
use parity_bonds::schedule::{next_coupon_date, prev_coupon_date};
use parity_core::Date;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, ConventionArgs};
use crate::output::{format_price, print_header, print_report, print_table, KeyValue, Report};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub maturity: Date,

    /// Valuation date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub as_of: Date,

    /// Annual coupon rate (as percentage)
    #[arg(short, long, default_value_t = 0.0)]
    pub coupon: f64,

    #[command(flatten)]
    pub convention: ConventionArgs,
}

/// Schedule result.
#[derive(Debug, Serialize)]
pub struct ScheduleReport {
    pub as_of: Date,
    pub maturity: Date,
    pub previous_coupon: Date,
    pub next_coupon: Date,
    pub cashflows: CashflowSchedule,
}

/// One row of the cashflow table.
#[derive(Tabled)]
struct CashflowRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Time (Years)")]
    time: String,
    #[tabled(rename = "Coupon")]
    coupon: String,
    #[tabled(rename = "Principal")]
    principal: String,
}

impl Report for ScheduleReport {
    const TITLE: &'static str = "Coupon Schedule";

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("As Of", self.as_of.to_string()),
            KeyValue::new("Maturity", self.maturity.to_string()),
            KeyValue::new("Previous Coupon", self.previous_coupon.to_string()),
            KeyValue::new("Next Coupon", self.next_coupon.to_string()),
            KeyValue::new("Cashflows", self.cashflows.len().to_string()),
            KeyValue::price("Total Amount", self.cashflows.total_amount()),
        ]
    }

    fn headline(&self) -> String {
        self.next_coupon.to_string()
    }

    fn print_details(&self) {
        let rows: Vec<CashflowRow> = self
            .cashflows
            .iter()
            .enumerate()
            .map(|(i, cf)| CashflowRow {
                index: i + 1,
                time: format!("{:.6}", cf.time),
                coupon: format_price(cf.coupon),
                principal: format_price(cf.principal),
            })
            .collect();

        print_header("Cashflows");
        print_table(&rows);
    }
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let terms = args
        .convention
        .terms(args.as_of, args.maturity, args.coupon, config)?;
    let conv = terms.convention();

    let report = ScheduleReport {
        as_of: terms.as_of(),
        maturity: terms.maturity(),
        previous_coupon: prev_coupon_date(terms.as_of(), terms.maturity(), conv)
            .context("cannot find the previous coupon date")?,
        next_coupon: next_coupon_date(terms.as_of(), terms.maturity(), conv)
            .context("cannot find the next coupon date")?,
        cashflows: vanilla_bond_cashflows(&terms).context("cannot generate cashflows")?,
    };
    print_report(&report, format)
}
