//! Extrapolation methods for two-point trend lines.
//!
//! This module provides the two models used to project a trend through a
//! start and an end anchor:
//!
//! - [`LogarithmicExtrapolator`]: Straight line in log-price, constant
//!   continuous growth rate
//! - [`LinearExtrapolator`]: Straight line in price, constant absolute change
//!
//! # Choosing a Model
//!
//! | Model | Price domain | Properties |
//! |-------|--------------|------------|
//! | Logarithmic | `> 0` | Constant percentage change, never crosses zero |
//! | Linear | any | Constant absolute change, may go negative |
//!
//! Extrapolation is unbounded: the target time may lie before, between or
//! after the anchors.
//!
//! # Example
//!
//! ```rust
//! use trendline_math::extrapolation::{Extrapolator, LogarithmicExtrapolator};
//! use trendline_math::AnchorPoint;
//!
//! let start = AnchorPoint::new(0.0, 100.0);
//! let end = AnchorPoint::new(10.0, 200.0);
//!
//! // One more doubling period
//! let price = LogarithmicExtrapolator.extrapolate(start, end, 20.0).unwrap();
//! assert!((price - 400.0).abs() < 1e-9);
//! ```

mod linear;
mod logarithmic;

pub use linear::LinearExtrapolator;
pub use logarithmic::LogarithmicExtrapolator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MathError, MathResult};
use crate::point::AnchorPoint;

/// Trait for two-point trend extrapolation.
///
/// Implementors fit a straight line through the anchors in their own
/// coordinate space and evaluate it at the target time.
pub trait Extrapolator: Send + Sync {
    /// Returns the slope of the trend in the model's coordinate space, per
    /// second.
    ///
    /// For the linear model this is price per second; for the logarithmic
    /// model it is log-price per second (the continuous growth rate).
    fn slope(&self, start: AnchorPoint, end: AnchorPoint) -> MathResult<f64>;

    /// Extrapolates the trend to `target_time`.
    ///
    /// # Arguments
    ///
    /// * `start` - Start anchor
    /// * `end` - End anchor
    /// * `target_time` - Time (epoch seconds) at which to evaluate the trend
    fn extrapolate(&self, start: AnchorPoint, end: AnchorPoint, target_time: f64)
        -> MathResult<f64>;

    /// Returns the name of the extrapolation method.
    fn name(&self) -> &'static str;
}

/// Rejects a projected price that is infinite or NaN.
pub(crate) fn ensure_finite(target_time: f64, price: f64) -> MathResult<f64> {
    if price.is_finite() {
        Ok(price)
    } else {
        log::debug!("projected price at t = {target_time} is {price}");
        Err(MathError::non_finite_result(target_time, price))
    }
}

/// Rejects anchors that share a time.
pub(crate) fn ensure_time_range(start: AnchorPoint, end: AnchorPoint) -> MathResult<f64> {
    let span = start.span_to(&end);
    if span == 0.0 {
        log::debug!("rejecting trend with zero time span at t = {}", start.time);
        return Err(MathError::invalid_time_range(start.time));
    }
    Ok(span)
}

/// Model used to project a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendModel {
    /// Linear in log-price: constant percentage growth.
    #[default]
    Logarithmic,
    /// Linear in price: constant absolute growth.
    Linear,
}

impl TrendModel {
    /// Returns the extrapolator implementing this model.
    #[must_use]
    pub fn extrapolator(&self) -> &'static dyn Extrapolator {
        match self {
            TrendModel::Logarithmic => &LogarithmicExtrapolator,
            TrendModel::Linear => &LinearExtrapolator,
        }
    }

    /// Returns both models, logarithmic first.
    #[must_use]
    pub fn all() -> &'static [TrendModel] {
        &[TrendModel::Logarithmic, TrendModel::Linear]
    }

    /// Returns true if the model needs strictly positive anchor prices.
    #[must_use]
    pub fn requires_positive_prices(&self) -> bool {
        matches!(self, TrendModel::Logarithmic)
    }
}

impl fmt::Display for TrendModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extrapolator().name())
    }
}

impl FromStr for TrendModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logarithmic" | "log" => Ok(TrendModel::Logarithmic),
            "linear" | "lin" => Ok(TrendModel::Linear),
            _ => Err(format!("unknown trend model: {s}")),
        }
    }
}

/// Predicts the price at `target_time` on the trend through
/// `(start_time, start_price)` and `(end_time, end_price)`.
///
/// # Errors
///
/// - [`MathError::InvalidTimeRange`] if `start_time == end_time`
/// - [`MathError::InvalidPriceDomain`] if `model` is logarithmic and either
///   price is not strictly positive
/// - [`MathError::NonFiniteResult`] if the projected price overflows
pub fn predict(
    model: TrendModel,
    start_price: f64,
    end_price: f64,
    start_time: f64,
    end_time: f64,
    target_time: f64,
) -> MathResult<f64> {
    let start = AnchorPoint::new(start_time, start_price);
    let end = AnchorPoint::new(end_time, end_price);
    model.extrapolator().extrapolate(start, end, target_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // 2025-01-01 05:00, 2025-03-01 05:00 and 2025-03-07 05:00 in UTC+05:00
    const T0: f64 = 1_735_689_600.0;
    const T1: f64 = 1_740_787_200.0;
    const T2: f64 = 1_741_305_600.0;

    #[test]
    fn test_reference_scenario() {
        let ratio = (T2 - T1) / (T1 - T0);

        let log_price = predict(TrendModel::Logarithmic, 1.0, 10.0, T0, T1, T2).unwrap();
        assert_relative_eq!(log_price, 10.0 * 10f64.powf(ratio), max_relative = 1e-12);

        let linear_price = predict(TrendModel::Linear, 1.0, 10.0, T0, T1, T2).unwrap();
        assert_relative_eq!(linear_price, 10.0 + 9.0 * ratio, max_relative = 1e-12);
    }

    #[test]
    fn test_reference_scenario_hand_values() {
        // 59 days between anchors, 6 days past the end anchor
        let log_price = predict(TrendModel::Logarithmic, 1.0, 10.0, T0, T1, T2).unwrap();
        assert_relative_eq!(log_price, 12.638_482_029_3, epsilon = 1e-9);

        let linear_price = predict(TrendModel::Linear, 1.0, 10.0, T0, T1, T2).unwrap();
        assert_relative_eq!(linear_price, 10.915_254_237_3, epsilon = 1e-9);
    }

    #[test]
    fn test_both_models_agree_on_flat_trend() {
        for model in TrendModel::all() {
            for t in [T0 - 1e6, T0, T1, T2, T2 + 1e7] {
                let price = predict(*model, 42.5, 42.5, T0, T1, t).unwrap();
                assert_relative_eq!(price, 42.5, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_equal_times_rejected_by_both_models() {
        for model in TrendModel::all() {
            let err = predict(*model, 1.0, 2.0, T0, T0, T1).unwrap_err();
            assert_eq!(err, MathError::invalid_time_range(T0));
        }
    }

    #[test]
    fn test_price_domain_only_for_logarithmic() {
        for (p0, p1) in [(0.0, 1.0), (1.0, 0.0), (-3.0, 2.0), (2.0, -0.5)] {
            let err = predict(TrendModel::Logarithmic, p0, p1, T0, T1, T2).unwrap_err();
            assert!(err.is_price_domain());

            assert!(predict(TrendModel::Linear, p0, p1, T0, T1, T2).is_ok());
        }
    }

    #[test]
    fn test_time_range_checked_before_price_domain() {
        let err = predict(TrendModel::Logarithmic, -1.0, 2.0, T0, T0, T1).unwrap_err();
        assert!(matches!(err, MathError::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_model_parse_and_display() {
        assert_eq!("log".parse::<TrendModel>().unwrap(), TrendModel::Logarithmic);
        assert_eq!("Linear".parse::<TrendModel>().unwrap(), TrendModel::Linear);
        assert!("cubic".parse::<TrendModel>().is_err());

        assert_eq!(TrendModel::Logarithmic.to_string(), "Logarithmic");
        assert_eq!(TrendModel::Linear.to_string(), "Linear");
        assert!(TrendModel::Logarithmic.requires_positive_prices());
        assert!(!TrendModel::Linear.requires_positive_prices());
    }
}
