//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// A command result that can be rendered in every [`OutputFormat`].
pub trait Report: Serialize {
    /// Heading shown above the table.
    const TITLE: &'static str;

    /// Rows of the summary table.
    fn rows(&self) -> Vec<KeyValue>;

    /// The single value printed in minimal mode.
    fn headline(&self) -> String;

    /// Prints any further tables after the summary.
    fn print_details(&self) {}
}

/// Prints a report in the requested format.
pub fn print_report<R: Report>(report: &R, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(R::TITLE);
            print_table(&report.rows());
            report.print_details();
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Minimal => {
            println!("{}", report.headline());
        }
    }
    Ok(())
}

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Formats a rate in percent.
pub fn format_percent(value: f64) -> String {
    format!("{value:.6}%")
}

/// Formats a price or amount.
pub fn format_price(value: f64) -> String {
    format!("{value:.6}")
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as a price.
    pub fn price(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_price(value))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
