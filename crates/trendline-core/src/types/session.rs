//! Trading session convention.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// When the trading day opens in the operating timezone.
///
/// Day, week and month buckets open at `open_hour:00`. Four-hour buckets
/// are aligned so that one of them also opens at `open_hour`, giving
/// 01:00, 05:00, 09:00, ... for the default 05:00 session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TradingSession {
    open_hour: u32,
}

impl TradingSession {
    /// Default session opening hour (05:00 local).
    pub const DEFAULT_OPEN_HOUR: u32 = 5;

    /// Creates a session opening at `open_hour:00`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSessionHour` if `open_hour` is not in `0..24`.
    pub fn new(open_hour: u32) -> CoreResult<Self> {
        if open_hour >= 24 {
            return Err(CoreError::InvalidSessionHour { hour: open_hour });
        }
        Ok(Self { open_hour })
    }

    /// Returns the opening hour.
    #[must_use]
    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    /// Returns the first four-hour bucket start of the day (`open_hour mod 4`).
    #[must_use]
    pub fn four_hour_anchor(&self) -> u32 {
        self.open_hour % 4
    }
}

impl Default for TradingSession {
    fn default() -> Self {
        Self {
            open_hour: Self::DEFAULT_OPEN_HOUR,
        }
    }
}

impl TryFrom<u32> for TradingSession {
    type Error = CoreError;

    fn try_from(open_hour: u32) -> CoreResult<Self> {
        Self::new(open_hour)
    }
}

impl From<TradingSession> for u32 {
    fn from(session: TradingSession) -> Self {
        session.open_hour
    }
}

impl fmt::Display for TradingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.open_hour)
    }
}
