//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown settings key.
    #[error("Unknown configuration key: {0}")]
    UnknownConfigKey(String),

    /// Rejected settings value.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidConfigValue {
        /// Settings key.
        key: &'static str,
        /// Rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// No config directory could be determined.
    #[error("Could not determine config directory; use --config")]
    NoConfigDir,

    /// The settings file could not be parsed.
    #[error("Invalid settings file {path}: {source}")]
    SettingsFile {
        /// Path of the settings file.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Creates an invalid settings value error.
    pub fn invalid_value(
        key: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfigValue {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
