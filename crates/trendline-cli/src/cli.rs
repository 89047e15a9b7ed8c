//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{AutoDetectArgs, BoundaryArgs, ConfigArgs, PredictArgs};

/// Trendline - project a price trend through two anchor points
#[derive(Parser)]
#[command(name = "trendline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from config, else table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operating timezone (IANA name, e.g. Asia/Karachi) [default: from config]
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    /// Path to the settings file
    #[arg(long, global = true, env = "TRENDLINE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Predict the price at a target time
    Predict(PredictArgs),

    /// Predict the price at the start of every standard timeframe
    AutoDetect(AutoDetectArgs),

    /// Show the start of the current bucket of a timeframe
    Boundary(BoundaryArgs),

    /// Manage settings
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}

impl OutputFormat {
    /// Returns the lowercase name used on the command line and in settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Minimal => "minimal",
        }
    }
}
