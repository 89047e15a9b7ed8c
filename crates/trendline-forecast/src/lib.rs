//! # Trendline Forecast
//!
//! Projects a two-anchor trend to explicit target times and to the start of
//! every standard trading timeframe.
//!
//! - **Trend**: A validated pair of anchor points
//! - **Forecast**: Both models evaluated at one target time, each with its own
//!   outcome
//! - **Auto Detect**: Forecasts at all seven timeframe boundaries, computed
//!   against a single sampled instant
//!
//! ## Architecture
//!
//! `trendline-forecast` depends on `trendline-math` for the extrapolators and
//! on `trendline-core` for timeframe boundaries and civil time. Neither of
//! those depends on this crate.
//!
//! ## Example
//!
//! ```rust
//! use trendline_core::prelude::*;
//! use trendline_forecast::{Forecaster, Trend};
//!
//! let tz = DEFAULT_TIMEZONE;
//! let trend = Trend::from_civil(1.0, 10.0, "2025-01-01 05:00", "2025-03-01 05:00", &tz).unwrap();
//! let forecaster = Forecaster::new(trend);
//!
//! let now = parse_local_datetime("2025-03-07 13:59", &tz).unwrap();
//! let rows = forecaster.auto_detect(&now);
//! assert_eq!(rows.len(), 7);
//! assert_eq!(format_civil(&rows[2].boundary), "2025-03-07 05:00");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod forecast;
pub mod trend;

pub use error::{ForecastError, ForecastResult};
pub use forecast::{Forecast, Forecaster, TimeframeForecast};
pub use trend::Trend;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ForecastError, ForecastResult};
    pub use crate::forecast::{Forecast, Forecaster, TimeframeForecast};
    pub use crate::trend::Trend;
    pub use trendline_math::{AnchorPoint, MathError, TrendModel};
}
