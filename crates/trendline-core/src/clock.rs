//! Sources of the current instant.
//!
//! Nothing in the core reads the system clock directly. Callers sample a
//! [`Clock`] once per request and pass the resulting instant down, so a
//! single request sees one consistent "now".

use chrono::{DateTime, TimeZone, Utc};

/// Provides the current instant.
pub trait Clock {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current instant in `tz`.
    fn now_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz>
    where
        Self: Sized,
    {
        self.now().with_timezone(tz)
    }

    /// Returns a short name for diagnostics.
    fn name(&self) -> &str;
}

/// Real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always returns `instant`.
    pub fn new<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
