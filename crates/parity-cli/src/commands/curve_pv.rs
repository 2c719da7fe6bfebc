//! Curve valuation command implementation.

use anyhow::{Context, Result};
use clap::Args;
use parity_bonds::config::PricingConfig;
use parity_bonds::pricing::{pv_from_curve, pv_from_curve_with_principal};
use parity_core::Date;
use parity_curves::RateCurve;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_curve, BondArgs};
use crate::output::{print_report, KeyValue, Report};

/// Arguments for the curve-pv command.
#[derive(Args, Debug)]
pub struct CurvePvArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Rate curve as tenor:rate pairs in years and percent (e.g., 0.5:4.1,2:4.4,10:4.9)
    #[arg(long, value_parser = parse_curve)]
    pub curve: RateCurve,

    /// Discount the principal as well as the coupons
    #[arg(long)]
    pub include_principal: bool,
}

/// Curve valuation result.
#[derive(Debug, Serialize)]
pub struct CurvePvReport {
    pub as_of: Date,
    pub maturity: Date,
    pub coupon_rate: f64,
    pub curve: RateCurve,
    pub include_principal: bool,
    pub present_value: f64,
}

impl Report for CurvePvReport {
    const TITLE: &'static str = "Curve Valuation";

    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("As Of", self.as_of.to_string()),
            KeyValue::new("Maturity", self.maturity.to_string()),
            KeyValue::new("Coupon", format!("{}%", self.coupon_rate)),
            KeyValue::new("Curve", self.curve.to_string()),
            KeyValue::new(
                "Flows",
                if self.include_principal {
                    "coupons and principal"
                } else {
                    "coupons only"
                },
            ),
            KeyValue::price("Present Value", self.present_value),
        ]
    }

    fn headline(&self) -> String {
        format!("{:.6}", self.present_value)
    }
}

/// Execute the curve-pv command.
pub fn execute(args: CurvePvArgs, config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let terms = args.bond.terms(config)?;

    let present_value = if args.include_principal {
        pv_from_curve_with_principal(&terms, &args.curve)
    } else {
        pv_from_curve(&terms, &args.curve)
    }
    .with_context(|| format!("cannot value on curve {}", args.curve))?;

    let report = CurvePvReport {
        as_of: terms.as_of(),
        maturity: terms.maturity(),
        coupon_rate: terms.coupon_rate(),
        curve: args.curve,
        include_principal: args.include_principal,
        present_value,
    };
    print_report(&report, format)
}
