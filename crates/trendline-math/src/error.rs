//! Error types for trend extrapolation.

use thiserror::Error;

/// A specialized Result type for extrapolation operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while extrapolating a trend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Start and end anchors share the same time, so the slope is undefined.
    #[error("Invalid time range: start and end anchors are both at t = {time}")]
    InvalidTimeRange {
        /// The shared anchor time (epoch seconds).
        time: f64,
    },

    /// The logarithmic model was given a price outside the domain of `ln`.
    #[error(
        "Invalid price domain: logarithmic model requires positive prices \
         (start = {start_price}, end = {end_price})"
    )]
    InvalidPriceDomain {
        /// Start anchor price.
        start_price: f64,
        /// End anchor price.
        end_price: f64,
    },

    /// The projected price overflowed or is otherwise not a finite number.
    #[error("Non-finite result: projected price at t = {target_time} is {value}")]
    NonFiniteResult {
        /// Target time (epoch seconds).
        target_time: f64,
        /// The non-finite value produced.
        value: f64,
    },
}

impl MathError {
    /// Creates an invalid time range error.
    #[must_use]
    pub fn invalid_time_range(time: f64) -> Self {
        Self::InvalidTimeRange { time }
    }

    /// Creates an invalid price domain error.
    #[must_use]
    pub fn invalid_price_domain(start_price: f64, end_price: f64) -> Self {
        Self::InvalidPriceDomain {
            start_price,
            end_price,
        }
    }

    /// Creates a non-finite result error.
    #[must_use]
    pub fn non_finite_result(target_time: f64, value: f64) -> Self {
        Self::NonFiniteResult { target_time, value }
    }

    /// Returns true for errors that only affect the logarithmic model.
    #[must_use]
    pub fn is_price_domain(&self) -> bool {
        matches!(self, Self::InvalidPriceDomain { .. })
    }
}
