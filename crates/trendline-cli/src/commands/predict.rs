//! Predict command implementation.
//!
//! Projects the trend to one target time.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use trendline_core::types::parse_epoch_time;
use trendline_forecast::Forecaster;
use trendline_math::TrendModel;

use crate::cli::OutputFormat;
use crate::commands::{warn_failed_models, Context, TrendArgs};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the predict command.
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub trend: TrendArgs,

    /// Target time (YYYY-MM-DD HH:MM, local to the operating timezone)
    #[arg(long, default_value = "2025-03-07 05:00")]
    pub target_time: String,

    /// Model(s) to evaluate
    #[arg(short, long, value_enum, default_value = "both")]
    pub model: ModelChoice,
}

/// Which model(s) to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelChoice {
    /// Logarithmic (constant percentage growth)
    Log,
    /// Linear (constant absolute growth)
    Linear,
    /// Both models
    Both,
}

impl ModelChoice {
    fn models(self) -> &'static [TrendModel] {
        match self {
            Self::Log => &[TrendModel::Logarithmic],
            Self::Linear => &[TrendModel::Linear],
            Self::Both => TrendModel::all(),
        }
    }
}

/// One model's prediction.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PredictionRow {
    #[tabled(rename = "Model")]
    pub model: TrendModel,
    #[tabled(rename = "Target Time")]
    pub target_time: String,
    #[tabled(rename = "Predicted Price")]
    pub price: String,
}

/// Execute the predict command.
pub fn execute(args: PredictArgs, ctx: &Context) -> Result<()> {
    // Parse every input before computing anything
    let trend = args.trend.trend(&ctx.tz)?;
    let target_time = parse_epoch_time(&args.target_time, &ctx.tz)?;

    let forecast = Forecaster::new(trend)
        .with_session(ctx.session)
        .at(target_time);

    let models = args.model.models();
    if models.iter().all(|model| forecast.get(*model).is_err()) {
        // Nothing to show: fail with the first model's error
        if let Some(Err(e)) = models.first().map(|model| forecast.get(*model)) {
            return Err(e.clone().into());
        }
    }
    warn_failed_models(models, [&forecast]);

    let rows: Vec<PredictionRow> = models
        .iter()
        .map(|model| PredictionRow {
            model: *model,
            target_time: args.target_time.trim().to_string(),
            price: ctx.price_cell(forecast.get(*model)),
        })
        .collect();

    if ctx.format == OutputFormat::Table {
        print_header("Trend Prediction");
        let summary = vec![
            KeyValue::new(
                "Start",
                format!("{} @ {}", args.trend.start_time.trim(), args.trend.start_price),
            ),
            KeyValue::new(
                "End",
                format!("{} @ {}", args.trend.end_time.trim(), args.trend.end_price),
            ),
            KeyValue::new("Timezone", ctx.tz.name()),
        ];
        let slopes = models.iter().map(|model| {
            KeyValue::new(
                format!("{} slope/day", model),
                ctx.price_cell(&trend.slope_per_day(*model)),
            )
        });
        let summary: Vec<KeyValue> = summary.into_iter().chain(slopes).collect();
        print_output(&summary, ctx.format)?;
    }

    print_output(&rows, ctx.format)
}
