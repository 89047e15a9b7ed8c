//! CLI command implementations.

pub mod auto_detect;
pub mod boundary;
pub mod config;
pub mod predict;

pub use auto_detect::AutoDetectArgs;
pub use boundary::BoundaryArgs;
pub use config::ConfigArgs;
pub use predict::PredictArgs;

use anyhow::Result;
use chrono::DateTime;
use chrono_tz::Tz;
use clap::Args;

use trendline_core::prelude::*;
use trendline_forecast::{Forecast, ForecastResult, Trend};
use trendline_math::{MathResult, TrendModel};

use crate::cli::OutputFormat;
use crate::output::{format_price, print_warning};
use crate::settings::{Settings, MAX_PRECISION, MIN_PRECISION};

/// Resolved settings for one calculation command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Operating timezone.
    pub tz: Tz,
    /// Trading session for boundaries.
    pub session: TradingSession,
    /// Decimal places for prices.
    pub precision: usize,
    /// Output format.
    pub format: OutputFormat,
}

impl Context {
    /// Merges command-line overrides with the settings file.
    pub fn resolve(
        format: Option<OutputFormat>,
        timezone: Option<&str>,
        settings: &Settings,
    ) -> Result<Self> {
        let tz = parse_timezone(timezone.unwrap_or(&settings.timezone))?;
        let session = TradingSession::new(settings.session_open_hour)?;

        if !settings.use_colors {
            colored::control::set_override(false);
        }

        tracing::debug!("operating in {} with session open {}", tz.name(), session);

        Ok(Self {
            tz,
            session,
            precision: settings.precision.clamp(MIN_PRECISION, MAX_PRECISION),
            format: format.unwrap_or(settings.default_format),
        })
    }

    /// Formats a model outcome; failed outcomes render as `n/a`.
    pub fn price_cell(&self, outcome: &MathResult<f64>) -> String {
        match outcome {
            Ok(price) => format_price(*price, self.precision),
            Err(_) => UNAVAILABLE.to_string(),
        }
    }

    /// Returns the reference instant: `--now` if given, else the system clock.
    ///
    /// Sampled once per command so every boundary shares one "now".
    pub fn reference_now(&self, now: Option<&str>) -> Result<DateTime<Tz>> {
        let now = match now {
            Some(text) => {
                let instant = parse_local_datetime(text, &self.tz)?;
                sample(&FixedClock::new(&instant), &self.tz)
            }
            None => sample(&SystemClock::new(), &self.tz),
        };
        Ok(now)
    }
}

/// Cell text for a model that could not be evaluated.
pub const UNAVAILABLE: &str = "n/a";

/// Warns once for each of `models` that failed in any of `outcomes`.
pub fn warn_failed_models<'a>(
    models: &[TrendModel],
    outcomes: impl IntoIterator<Item = &'a Forecast>,
) {
    let mut warned = Vec::new();
    for forecast in outcomes {
        for model in models {
            if let Err(e) = forecast.get(*model) {
                if !warned.contains(model) {
                    print_warning(&format!("{} model: {}", model, e));
                    warned.push(*model);
                }
            }
        }
    }
}

fn sample<C: Clock>(clock: &C, tz: &Tz) -> DateTime<Tz> {
    let now = clock.now_in(tz);
    tracing::debug!("{} reads {}", clock.name(), format_civil(&now));
    now
}

/// The two anchor points of a trend.
#[derive(Args, Debug, Clone)]
pub struct TrendArgs {
    /// Price at the start anchor
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub start_price: f64,

    /// Price at the end anchor
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub end_price: f64,

    /// Start anchor time (YYYY-MM-DD HH:MM, local to the operating timezone)
    #[arg(long, default_value = "2025-01-01 05:00")]
    pub start_time: String,

    /// End anchor time (YYYY-MM-DD HH:MM, local to the operating timezone)
    #[arg(long, default_value = "2025-03-01 05:00")]
    pub end_time: String,
}

impl TrendArgs {
    /// Builds the trend in `tz`.
    pub fn trend(&self, tz: &Tz) -> ForecastResult<Trend> {
        Trend::from_civil(
            self.start_price,
            self.end_price,
            &self.start_time,
            &self.end_time,
            tz,
        )
    }
}
