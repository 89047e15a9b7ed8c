//! Two-anchor trends.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use trendline_core::types::parse_epoch_time;
use trendline_math::{AnchorPoint, MathError, MathResult, TrendModel};

use crate::error::{ForecastError, ForecastResult};

/// Seconds per day, for reporting slopes.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// A trend line defined by a start and an end anchor.
///
/// Construction guarantees finite inputs and distinct anchor times, so the
/// only error left for [`Trend::predict`] is the logarithmic price domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    start: AnchorPoint,
    end: AnchorPoint,
}

impl Trend {
    /// Creates a trend from two anchors.
    ///
    /// # Errors
    ///
    /// - `ForecastError::NonFinite` if any time or price is NaN or infinite
    /// - `ForecastError::Math(InvalidTimeRange)` if the anchors share a time
    pub fn new(start: AnchorPoint, end: AnchorPoint) -> ForecastResult<Self> {
        ensure_finite("start time", start.time)?;
        ensure_finite("end time", end.time)?;
        ensure_finite("start price", start.price)?;
        ensure_finite("end price", end.price)?;

        if start.time == end.time {
            return Err(MathError::invalid_time_range(start.time).into());
        }
        Ok(Self { start, end })
    }

    /// Creates a trend from prices and `YYYY-MM-DD HH:MM` times in `tz`.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Core(InputParse)` for malformed times, then the
    /// same errors as [`Trend::new`].
    pub fn from_civil<Tz: TimeZone>(
        start_price: f64,
        end_price: f64,
        start_time: &str,
        end_time: &str,
        tz: &Tz,
    ) -> ForecastResult<Self> {
        let start_time = parse_epoch_time(start_time, tz)?;
        let end_time = parse_epoch_time(end_time, tz)?;
        Self::new(
            AnchorPoint::new(start_time, start_price),
            AnchorPoint::new(end_time, end_price),
        )
    }

    /// Returns the start anchor.
    pub fn start(&self) -> AnchorPoint {
        self.start
    }

    /// Returns the end anchor.
    pub fn end(&self) -> AnchorPoint {
        self.end
    }

    /// Returns the seconds between the anchors (negative if end precedes start).
    pub fn span(&self) -> f64 {
        self.start.span_to(&self.end)
    }

    /// Predicts the price at `target_time` (epoch seconds) under `model`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidPriceDomain` for the logarithmic model when
    /// either anchor price is not strictly positive.
    pub fn predict(&self, model: TrendModel, target_time: f64) -> MathResult<f64> {
        model
            .extrapolator()
            .extrapolate(self.start, self.end, target_time)
    }

    /// Returns the trend's slope per day under `model`.
    ///
    /// Price per day for the linear model; continuous log-growth per day for
    /// the logarithmic model.
    pub fn slope_per_day(&self, model: TrendModel) -> MathResult<f64> {
        model
            .extrapolator()
            .slope(self.start, self.end)
            .map(|slope| slope * SECONDS_PER_DAY)
    }
}

fn ensure_finite(field: &'static str, value: f64) -> ForecastResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ForecastError::NonFinite { field, value })
    }
}
