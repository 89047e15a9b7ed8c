//! Boundary command implementation.
//!
//! Shows where the current bucket of a timeframe starts, without a trend.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use trendline_core::types::format_civil;
use trendline_core::Timeframe;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output};

/// Arguments for the boundary command.
#[derive(Args, Debug)]
pub struct BoundaryArgs {
    /// Timeframe (monthly|1M, weekly|1w, daily|1d, 4hourly|4h, 1hourly|1h,
    /// 15min|15m, 1min|1m). Omit for all.
    #[arg(short, long)]
    pub timeframe: Option<Timeframe>,

    /// Reference instant (YYYY-MM-DD HH:MM). Defaults to the current time.
    #[arg(long)]
    pub now: Option<String>,
}

/// One timeframe boundary.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct BoundaryRow {
    #[tabled(rename = "Timeframe")]
    pub timeframe: String,
    #[tabled(rename = "Timeframe Start")]
    pub start: String,
}

/// Execute the boundary command.
pub fn execute(args: BoundaryArgs, ctx: &Context) -> Result<()> {
    let now = ctx.reference_now(args.now.as_deref())?;

    let timeframes: Vec<Timeframe> = match args.timeframe {
        Some(timeframe) => vec![timeframe],
        None => Timeframe::all().to_vec(),
    };

    let rows: Vec<BoundaryRow> = timeframes
        .into_iter()
        .map(|timeframe| BoundaryRow {
            timeframe: timeframe.label().to_string(),
            start: format_civil(&ctx.session.boundary_start(timeframe, &now)),
        })
        .collect();

    if ctx.format == OutputFormat::Table {
        print_header(&format!("Timeframe Boundaries as of {}", format_civil(&now)));
    }

    print_output(&rows, ctx.format)
}
