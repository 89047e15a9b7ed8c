//! Rendering of result rows and status messages.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints rows in `format`.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Rounded table, first column left-aligned.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("(empty)");
    } else {
        let mut table = Table::new(data);
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::first()).with(Alignment::left()));
        println!("{table}");
    }
    Ok(())
}

fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

/// CSV with a header row taken from the field names.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout().lock());
    for row in data {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Prints minimal output: one row per line, values separated by tabs.
fn print_minimal<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", item.fields().join("\t"));
    }
    Ok(())
}

/// Formats a price with a fixed number of decimal places.
pub fn format_price(value: f64, precision: usize) -> String {
    format!("{:.prec$}", value, prec = precision)
}

/// Status line on stdout.
pub fn print_success(message: &str) {
    println!("{} {message}", "✓".green());
}

/// Failure line on stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}

/// Warning line on stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Informational line on stdout.
pub fn print_info(message: &str) {
    println!("{} {message}", "ℹ".blue());
}

/// A labelled value, rendered as a two-column row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Field")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a row from anything string-like.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Section title, bold and underlined.
pub fn print_header(title: &str) {
    println!("{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_precision() {
        assert_eq!(format_price(12.638_482_029_342_98, 10), "12.6384820293");
        assert_eq!(format_price(10.0, 2), "10.00");
    }
}
