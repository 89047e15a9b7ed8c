//! Linear extrapolation.

use super::{ensure_finite, ensure_time_range, Extrapolator};
use crate::error::MathResult;
use crate::point::AnchorPoint;

/// Linear extrapolation - straight line through both anchors in price space.
///
/// The formula is:
/// ```text
/// slope = (p1 - p0) / (t1 - t0)
/// p(t)  = p0 + slope * (t - t0)
/// ```
///
/// # Properties
///
/// - **Constant absolute change**: The same price delta per unit of time
/// - **Any sign**: Prices may be zero or negative, and so may the result
///
/// # Example
///
/// ```rust
/// use trendline_math::extrapolation::{Extrapolator, LinearExtrapolator};
/// use trendline_math::AnchorPoint;
///
/// let start = AnchorPoint::new(0.0, 1.0);
/// let end = AnchorPoint::new(10.0, 2.0);
///
/// let price = LinearExtrapolator.extrapolate(start, end, 15.0).unwrap();
/// assert!((price - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearExtrapolator;

impl LinearExtrapolator {
    /// Creates a new linear extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for LinearExtrapolator {
    fn slope(&self, start: AnchorPoint, end: AnchorPoint) -> MathResult<f64> {
        let span = ensure_time_range(start, end)?;
        Ok((end.price - start.price) / span)
    }

    fn extrapolate(
        &self,
        start: AnchorPoint,
        end: AnchorPoint,
        target_time: f64,
    ) -> MathResult<f64> {
        let slope = self.slope(start, end)?;
        // y = y0 + slope * (t - t0)
        ensure_finite(target_time, start.price + slope * (target_time - start.time))
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_extrapolation() {
        let extrap = LinearExtrapolator::new();
        let start = AnchorPoint::new(10.0, 0.05);
        let end = AnchorPoint::new(20.0, 0.06);

        // At t=30: 0.05 + 0.001 * (30-10) = 0.07
        let value = extrap.extrapolate(start, end, 30.0).unwrap();
        assert_relative_eq!(value, 0.07, epsilon = 1e-12);

        // Between the anchors
        let value = extrap.extrapolate(start, end, 15.0).unwrap();
        assert_relative_eq!(value, 0.055, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_before_start() {
        let start = AnchorPoint::new(100.0, 50.0);
        let end = AnchorPoint::new(200.0, 60.0);

        let value = LinearExtrapolator.extrapolate(start, end, 0.0).unwrap();
        assert_relative_eq!(value, 40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_at_start_is_exact() {
        let start = AnchorPoint::new(1_735_689_600.0, 0.123_456_789);
        let end = AnchorPoint::new(1_740_787_200.0, 9.87);

        let value = LinearExtrapolator.extrapolate(start, end, start.time).unwrap();
        assert_eq!(value, start.price);
    }

    #[test]
    fn test_linear_can_go_negative() {
        let start = AnchorPoint::new(0.0, 10.0);
        let end = AnchorPoint::new(1.0, 5.0);

        let value = LinearExtrapolator.extrapolate(start, end, 3.0).unwrap();
        assert_relative_eq!(value, -5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_accepts_non_positive_prices() {
        let start = AnchorPoint::new(0.0, -2.0);
        let end = AnchorPoint::new(4.0, 0.0);

        let value = LinearExtrapolator.extrapolate(start, end, 8.0).unwrap();
        assert_relative_eq!(value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_reversed_anchors() {
        // End anchor earlier than start anchor still defines the same line
        let start = AnchorPoint::new(10.0, 3.0);
        let end = AnchorPoint::new(0.0, 1.0);

        let value = LinearExtrapolator.extrapolate(start, end, 20.0).unwrap();
        assert_relative_eq!(value, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_zero_span() {
        let start = AnchorPoint::new(5.0, 1.0);
        let end = AnchorPoint::new(5.0, 2.0);

        let err = LinearExtrapolator.extrapolate(start, end, 6.0).unwrap_err();
        assert_eq!(err, MathError::invalid_time_range(5.0));
        assert!(LinearExtrapolator.slope(start, end).is_err());
    }

    #[test]
    fn test_linear_overflow_is_an_error() {
        let start = AnchorPoint::new(0.0, -1e308);
        let end = AnchorPoint::new(1.0, 1e308);

        let err = LinearExtrapolator.extrapolate(start, end, 10.0).unwrap_err();
        assert!(matches!(err, MathError::NonFiniteResult { .. }));
    }

    #[test]
    fn test_linear_name() {
        assert_eq!(LinearExtrapolator.name(), "Linear");
    }
}
