//! Error types for the Trendline core.
//!
//! Parsing and configuration failures that happen before any price is
//! computed. Extrapolation domain errors live in `trendline-math`.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Date/time text could not be interpreted.
    #[error("Invalid date or time '{input}': {reason}. Please use 'YYYY-MM-DD HH:MM'.")]
    InputParse {
        /// The rejected input text.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Timezone name is not in the IANA database.
    #[error("Unknown timezone: {name}")]
    UnknownTimezone {
        /// The rejected timezone name.
        name: String,
    },

    /// Session opening hour is outside `0..24`.
    #[error("Invalid session open hour: {hour} (must be 0-23)")]
    InvalidSessionHour {
        /// The rejected hour.
        hour: u32,
    },

    /// Timeframe tag is not one of the standard timeframes.
    #[error("Unknown timeframe: {tag}")]
    UnknownTimeframe {
        /// The rejected tag.
        tag: String,
    },
}

impl CoreError {
    /// Creates an input parse error.
    #[must_use]
    pub fn input_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InputParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown timezone error.
    #[must_use]
    pub fn unknown_timezone(name: impl Into<String>) -> Self {
        Self::UnknownTimezone { name: name.into() }
    }

    /// Creates an unknown timeframe error.
    #[must_use]
    pub fn unknown_timeframe(tag: impl Into<String>) -> Self {
        Self::UnknownTimeframe { tag: tag.into() }
    }
}
