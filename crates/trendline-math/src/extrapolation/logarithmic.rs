//! Logarithmic extrapolation.
//!
//! Fits a straight line through the natural logarithm of the anchor prices,
//! which makes the projected price compound at a constant continuous rate.

use super::{ensure_finite, ensure_time_range, Extrapolator};
use crate::error::{MathError, MathResult};
use crate::point::AnchorPoint;

/// Logarithmic extrapolation - straight line through both anchors in
/// log-price space.
///
/// The formula is:
/// ```text
/// slope = (ln(p1) - ln(p0)) / (t1 - t0)
/// p(t)  = exp(ln(p0) + slope * (t - t0))
/// ```
///
/// Equivalently `p(t) = p0 * (p1 / p0)^((t - t0) / (t1 - t0))`: every span of
/// `t1 - t0` multiplies the price by the same factor.
///
/// Both anchor prices must be strictly positive.
///
/// # Example
///
/// ```rust
/// use trendline_math::extrapolation::{Extrapolator, LogarithmicExtrapolator};
/// use trendline_math::AnchorPoint;
///
/// let start = AnchorPoint::new(0.0, 1.0);
/// let end = AnchorPoint::new(1.0, 10.0);
///
/// let price = LogarithmicExtrapolator.extrapolate(start, end, 3.0).unwrap();
/// assert!((price - 1000.0).abs() < 1e-9);
/// assert!(price > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LogarithmicExtrapolator;

impl LogarithmicExtrapolator {
    /// Creates a new logarithmic extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns `(ln(p0), ln(p1))`, rejecting non-positive prices.
    fn log_prices(start: AnchorPoint, end: AnchorPoint) -> MathResult<(f64, f64)> {
        // NaN fails the comparison too
        let positive = |price: f64| price > 0.0;
        if !positive(start.price) || !positive(end.price) {
            log::debug!(
                "rejecting logarithmic trend with prices {} and {}",
                start.price,
                end.price
            );
            return Err(MathError::invalid_price_domain(start.price, end.price));
        }
        Ok((start.price.ln(), end.price.ln()))
    }
}

impl Extrapolator for LogarithmicExtrapolator {
    fn slope(&self, start: AnchorPoint, end: AnchorPoint) -> MathResult<f64> {
        let span = ensure_time_range(start, end)?;
        let (log_start, log_end) = Self::log_prices(start, end)?;
        Ok((log_end - log_start) / span)
    }

    fn extrapolate(
        &self,
        start: AnchorPoint,
        end: AnchorPoint,
        target_time: f64,
    ) -> MathResult<f64> {
        let span = ensure_time_range(start, end)?;
        let (log_start, log_end) = Self::log_prices(start, end)?;
        let slope = (log_end - log_start) / span;

        let log_price = log_start + slope * (target_time - start.time);
        log::trace!("log-price at t = {target_time}: {log_price}");

        ensure_finite(target_time, log_price.exp())
    }

    fn name(&self) -> &'static str {
        "Logarithmic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_through_anchors() {
        let start = AnchorPoint::new(1_735_689_600.0, 0.000_123_45);
        let end = AnchorPoint::new(1_740_787_200.0, 0.987_65);

        let at_start = LogarithmicExtrapolator
            .extrapolate(start, end, start.time)
            .unwrap();
        assert_relative_eq!(at_start, start.price, max_relative = 1e-12);

        let at_end = LogarithmicExtrapolator
            .extrapolate(start, end, end.time)
            .unwrap();
        assert_relative_eq!(at_end, end.price, max_relative = 1e-12);
    }

    #[test]
    fn test_log_exponential_decay() {
        // For p = exp(-r*t), log extrapolation reproduces the curve exactly
        let r: f64 = 0.05;
        let start = AnchorPoint::new(0.0, 1.0);
        let end = AnchorPoint::new(1.0, (-r).exp());

        for t in [-2.0, 0.5, 3.0, 10.0] {
            let value = LogarithmicExtrapolator.extrapolate(start, end, t).unwrap();
            assert_relative_eq!(value, (-r * t).exp(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_log_constant_ratio_per_span() {
        let start = AnchorPoint::new(0.0, 2.0);
        let end = AnchorPoint::new(5.0, 3.0);

        let p10 = LogarithmicExtrapolator.extrapolate(start, end, 10.0).unwrap();
        let p15 = LogarithmicExtrapolator.extrapolate(start, end, 15.0).unwrap();
        assert_relative_eq!(p10 / end.price, 1.5, epsilon = 1e-12);
        assert_relative_eq!(p15 / p10, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_log_stays_positive_when_falling() {
        let start = AnchorPoint::new(0.0, 100.0);
        let end = AnchorPoint::new(1.0, 10.0);

        let value = LogarithmicExtrapolator.extrapolate(start, end, 5.0).unwrap();
        assert!(value > 0.0);
        assert_relative_eq!(value, 1e-3, epsilon = 1e-15);
    }

    #[test]
    fn test_log_slope_is_continuous_rate() {
        let start = AnchorPoint::new(0.0, 1.0);
        let end = AnchorPoint::new(2.0, std::f64::consts::E);

        let slope = LogarithmicExtrapolator.slope(start, end).unwrap();
        assert_relative_eq!(slope, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_log_rejects_non_positive() {
        let good = AnchorPoint::new(0.0, 1.0);
        for bad_price in [0.0, -0.0, -1.0, f64::NAN] {
            let bad = AnchorPoint::new(1.0, bad_price);
            let err = LogarithmicExtrapolator.extrapolate(good, bad, 2.0).unwrap_err();
            assert!(err.is_price_domain());

            let bad_start = AnchorPoint::new(-1.0, bad_price);
            let err = LogarithmicExtrapolator
                .extrapolate(bad_start, good, 2.0)
                .unwrap_err();
            assert!(err.is_price_domain());
        }
    }

    #[test]
    fn test_log_zero_span() {
        let start = AnchorPoint::new(3.0, 1.0);
        let end = AnchorPoint::new(3.0, 2.0);

        assert!(matches!(
            LogarithmicExtrapolator.extrapolate(start, end, 4.0),
            Err(MathError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn test_log_overflow_is_an_error() {
        let start = AnchorPoint::new(0.0, 1e-300);
        let end = AnchorPoint::new(1.0, 1e300);

        let err = LogarithmicExtrapolator.extrapolate(start, end, 10.0).unwrap_err();
        assert!(matches!(
            err,
            MathError::NonFiniteResult { target_time, value }
                if target_time == 10.0 && value == f64::INFINITY
        ));

        // The same trend is still fine near the anchors
        let mid = LogarithmicExtrapolator.extrapolate(start, end, 0.5).unwrap();
        assert_relative_eq!(mid, 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_log_name() {
        assert_eq!(LogarithmicExtrapolator::new().name(), "Logarithmic");
    }
}
