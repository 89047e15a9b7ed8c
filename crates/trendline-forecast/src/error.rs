//! Error types for forecasting.

use thiserror::Error;
use trendline_core::CoreError;
use trendline_math::MathError;

/// A specialized Result type for forecast operations.
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Errors that abort a whole forecast request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    /// Extrapolation domain error.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Input parsing or configuration error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An anchor time or price is NaN or infinite.
    #[error("Invalid {field}: {value} is not a finite number")]
    NonFinite {
        /// Which input was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
