//! Anchor points.

use serde::{Deserialize, Serialize};

/// A known `(time, price)` sample on a trend line.
///
/// `time` is in seconds since the Unix epoch. Two anchors, start and end,
/// define the trend that the extrapolators project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    /// Seconds since the Unix epoch.
    pub time: f64,
    /// Observed price at `time`.
    pub price: f64,
}

impl AnchorPoint {
    /// Creates a new anchor point.
    #[must_use]
    pub fn new(time: f64, price: f64) -> Self {
        Self { time, price }
    }

    /// Returns the time elapsed from `self` to `other`.
    #[must_use]
    pub fn span_to(&self, other: &AnchorPoint) -> f64 {
        other.time - self.time
    }
}
