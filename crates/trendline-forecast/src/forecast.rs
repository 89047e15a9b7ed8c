//! Forecasts at explicit targets and at timeframe boundaries.

use chrono::{DateTime, TimeZone};
use trendline_core::types::epoch_seconds;
use trendline_core::{Timeframe, TradingSession};
use trendline_math::{MathResult, TrendModel};

use crate::trend::Trend;

/// Both models evaluated at one target time.
///
/// Each model keeps its own outcome: a logarithmic price-domain error does not
/// hide the linear result.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Target time in epoch seconds.
    pub target_time: f64,
    /// Logarithmic model outcome.
    pub logarithmic: MathResult<f64>,
    /// Linear model outcome.
    pub linear: MathResult<f64>,
}

impl Forecast {
    /// Returns the outcome for `model`.
    pub fn get(&self, model: TrendModel) -> &MathResult<f64> {
        match model {
            TrendModel::Logarithmic => &self.logarithmic,
            TrendModel::Linear => &self.linear,
        }
    }
}

/// A forecast at the start of one timeframe bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeframeForecast<Tz: TimeZone> {
    /// The timeframe.
    pub timeframe: Timeframe,
    /// Start of the bucket containing the reference instant.
    pub boundary: DateTime<Tz>,
    /// Forecast with `boundary` as target time.
    pub forecast: Forecast,
}

/// Evaluates a trend at target times and timeframe boundaries.
///
/// # Example
///
/// ```rust
/// use trendline_forecast::prelude::*;
///
/// let trend = Trend::new(AnchorPoint::new(0.0, 1.0), AnchorPoint::new(100.0, 2.0)).unwrap();
/// let forecast = Forecaster::new(trend).at(200.0);
///
/// assert!((forecast.logarithmic.clone().unwrap() - 4.0).abs() < 1e-9);
/// assert!((forecast.linear.clone().unwrap() - 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecaster {
    trend: Trend,
    session: TradingSession,
}

impl Forecaster {
    /// Creates a forecaster using the default 05:00 session.
    #[must_use]
    pub fn new(trend: Trend) -> Self {
        Self {
            trend,
            session: TradingSession::default(),
        }
    }

    /// Sets the trading session used for boundaries.
    #[must_use]
    pub fn with_session(mut self, session: TradingSession) -> Self {
        self.session = session;
        self
    }

    /// Returns the trading session.
    pub fn session(&self) -> TradingSession {
        self.session
    }

    /// Evaluates both models at `target_time` (epoch seconds).
    pub fn at(&self, target_time: f64) -> Forecast {
        Forecast {
            target_time,
            logarithmic: self.trend.predict(TrendModel::Logarithmic, target_time),
            linear: self.trend.predict(TrendModel::Linear, target_time),
        }
    }

    /// Evaluates both models at the start of the `timeframe` bucket
    /// containing `now`.
    pub fn at_boundary<Tz: TimeZone>(
        &self,
        timeframe: Timeframe,
        now: &DateTime<Tz>,
    ) -> TimeframeForecast<Tz> {
        let boundary = self.session.boundary_start(timeframe, now);
        let forecast = self.at(epoch_seconds(&boundary));
        TimeframeForecast {
            timeframe,
            boundary,
            forecast,
        }
    }

    /// Evaluates both models at the start of every standard timeframe,
    /// longest first.
    ///
    /// All seven boundaries are cut from the same `now`.
    pub fn auto_detect<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<TimeframeForecast<Tz>> {
        log::debug!(
            "auto-detecting {} timeframes with session open {}",
            Timeframe::all().len(),
            self.session
        );
        Timeframe::all()
            .iter()
            .map(|timeframe| self.at_boundary(*timeframe, now))
            .collect()
    }
}
