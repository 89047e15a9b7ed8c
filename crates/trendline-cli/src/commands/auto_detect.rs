//! Auto-detect command implementation.
//!
//! Projects the trend to the start of the current bucket of every standard
//! timeframe, all cut from one reference instant.

use anyhow::Result;
use chrono::DateTime;
use chrono_tz::Tz;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use trendline_core::types::format_civil;
use trendline_forecast::{Forecaster, TimeframeForecast};
use trendline_math::TrendModel;

use crate::cli::OutputFormat;
use crate::commands::{warn_failed_models, Context, TrendArgs};
use crate::output::{print_header, print_info, print_output};

/// Arguments for the auto-detect command.
#[derive(Args, Debug)]
pub struct AutoDetectArgs {
    #[command(flatten)]
    pub trend: TrendArgs,

    /// Reference instant (YYYY-MM-DD HH:MM). Defaults to the current time.
    #[arg(long)]
    pub now: Option<String>,
}

/// One timeframe's forecast.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct TimeframeRow {
    #[tabled(rename = "Timeframe")]
    pub timeframe: String,
    #[tabled(rename = "Timeframe Start")]
    pub start: String,
    #[tabled(rename = "Logarithmic")]
    pub logarithmic: String,
    #[tabled(rename = "Linear")]
    pub linear: String,
}

impl TimeframeRow {
    fn new(row: &TimeframeForecast<Tz>, ctx: &Context) -> Self {
        Self {
            timeframe: row.timeframe.label().to_string(),
            start: format_civil(&row.boundary),
            logarithmic: ctx.price_cell(&row.forecast.logarithmic),
            linear: ctx.price_cell(&row.forecast.linear),
        }
    }
}

/// Execute the auto-detect command.
pub fn execute(args: AutoDetectArgs, ctx: &Context) -> Result<()> {
    let trend = args.trend.trend(&ctx.tz)?;
    let now: DateTime<Tz> = ctx.reference_now(args.now.as_deref())?;

    let forecasts = Forecaster::new(trend)
        .with_session(ctx.session)
        .auto_detect(&now);
    tracing::debug!("computed {} timeframe forecasts", forecasts.len());

    warn_failed_models(TrendModel::all(), forecasts.iter().map(|row| &row.forecast));

    let rows: Vec<TimeframeRow> = forecasts
        .iter()
        .map(|row| TimeframeRow::new(row, ctx))
        .collect();

    if ctx.format == OutputFormat::Table {
        print_header("Auto Detect Timeframes");
        print_info(&format!(
            "As of {} ({}, session opens {})",
            format_civil(&now),
            ctx.tz.name(),
            ctx.session
        ));
    }

    print_output(&rows, ctx.format)
}
