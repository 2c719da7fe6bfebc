//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AccruedArgs, AmortizeArgs, CurvePvArgs, PriceArgs, ScheduleArgs, YtmArgs};

/// Parity - fixed-rate bond valuation CLI
#[derive(Parser)]
#[command(name = "parity")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Pricing configuration file (TOML)
    #[arg(long, env = "PARITY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Present value of a bond at a flat yield
    Price(PriceArgs),

    /// Yield to maturity from a price
    Ytm(YtmArgs),

    /// Accrued interest since the previous coupon
    Accrued(AccruedArgs),

    /// Coupon dates and remaining cashflows
    Schedule(ScheduleArgs),

    /// Present value discounted on a rate curve
    CurvePv(CurvePvArgs),

    /// Straight-line amortization of a book price toward par
    Amortize(AmortizeArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the value)
    Minimal,
}
