//! Parity CLI - fixed-rate bond valuation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Present value at a flat yield
//! parity price --coupon 5.0 --maturity 2048-09-25 --as-of 2025-04-17 --yield 4.0
//!
//! # Yield from price
//! parity ytm --coupon 4.0 --maturity 2048-09-25 --as-of 2025-04-17 --price 89
//!
//! # Remaining cashflows as JSON
//! parity --format json schedule --maturity 2027-09-25 --as-of 2025-04-17 --coupon 5
//!
//! # Present value on a rate curve
//! parity curve-pv --coupon 4.5 --maturity 2035-09-25 --as-of 2025-04-17 \
//!     --curve 0.5:4.1,2:4.4,10:4.9 --include-principal
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = config::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &config, format)?,
        Commands::Ytm(args) => commands::ytm::execute(args, &config, format)?,
        Commands::Accrued(args) => commands::accrued::execute(args, &config, format)?,
        Commands::Schedule(args) => commands::schedule::execute(args, &config, format)?,
        Commands::CurvePv(args) => commands::curve_pv::execute(args, &config, format)?,
        Commands::Amortize(args) => commands::amortize::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so that `--format json` output stays parseable.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
