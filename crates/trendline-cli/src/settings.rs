//! User settings.
//!
//! Settings live in a JSON file under the platform config directory. Missing
//! keys fall back to their defaults, so a partial file is valid.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trendline_core::types::{parse_timezone, DEFAULT_TIMEZONE};
use trendline_core::TradingSession;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Smallest accepted output precision.
pub const MIN_PRECISION: usize = 2;

/// Largest accepted output precision.
pub const MAX_PRECISION: usize = 12;

/// Persistent CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Operating timezone (IANA name).
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Decimal places for prices.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Output format when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Hour the trading day opens.
    #[serde(default = "default_session_open_hour")]
    pub session_open_hour: u32,

    /// Whether to use colors.
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}

fn default_precision() -> usize {
    10
}

fn default_session_open_hour() -> u32 {
    TradingSession::default().open_hour()
}

fn default_use_colors() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            precision: default_precision(),
            default_format: OutputFormat::default(),
            session_open_hour: default_session_open_hour(),
            use_colors: default_use_colors(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| CliError::SettingsFile {
            path: path.display().to_string(),
            source,
        })
    }

    /// Writes settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("saved settings to {}", path.display());
        Ok(())
    }

    /// Returns the value of `key` as text.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Timezone => self.timezone.clone(),
            ConfigKey::Precision => self.precision.to_string(),
            ConfigKey::DefaultFormat => self.default_format.as_str().to_string(),
            ConfigKey::SessionOpenHour => self.session_open_hour.to_string(),
            ConfigKey::UseColors => self.use_colors.to_string(),
        }
    }

    /// Validates and sets `key` from text.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> CliResult<()> {
        let name = key.as_str();
        match key {
            ConfigKey::Timezone => {
                parse_timezone(value)
                    .map_err(|e| CliError::invalid_value(name, value, e.to_string()))?;
                self.timezone = value.to_string();
            }
            ConfigKey::Precision => {
                let precision: usize = value
                    .parse()
                    .map_err(|_| CliError::invalid_value(name, value, "not an integer"))?;
                if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
                    return Err(CliError::invalid_value(
                        name,
                        value,
                        format!("must be between {MIN_PRECISION} and {MAX_PRECISION}"),
                    ));
                }
                self.precision = precision;
            }
            ConfigKey::DefaultFormat => {
                self.default_format = parse_format(value).ok_or_else(|| {
                    CliError::invalid_value(name, value, "expected table, json, csv or minimal")
                })?;
            }
            ConfigKey::SessionOpenHour => {
                let hour: u32 = value
                    .parse()
                    .map_err(|_| CliError::invalid_value(name, value, "not an integer"))?;
                let session = TradingSession::new(hour)
                    .map_err(|e| CliError::invalid_value(name, value, e.to_string()))?;
                self.session_open_hour = session.open_hour();
            }
            ConfigKey::UseColors => {
                self.use_colors = value
                    .parse()
                    .map_err(|_| CliError::invalid_value(name, value, "expected true or false"))?;
            }
        }
        Ok(())
    }

    /// Restores the default value of `key`.
    pub fn reset(&mut self, key: ConfigKey) {
        let defaults = Self::default();
        match key {
            ConfigKey::Timezone => self.timezone = defaults.timezone,
            ConfigKey::Precision => self.precision = defaults.precision,
            ConfigKey::DefaultFormat => self.default_format = defaults.default_format,
            ConfigKey::SessionOpenHour => self.session_open_hour = defaults.session_open_hour,
            ConfigKey::UseColors => self.use_colors = defaults.use_colors,
        }
    }
}

fn parse_format(value: &str) -> Option<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Some(OutputFormat::Table),
        "json" => Some(OutputFormat::Json),
        "csv" => Some(OutputFormat::Csv),
        "minimal" => Some(OutputFormat::Minimal),
        _ => None,
    }
}

/// Resolves the settings file path.
///
/// An explicit path wins; otherwise `<config dir>/trendline/config.json`.
pub fn resolve_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoConfigDir)?;
    Ok(base.join("trendline").join("config.json"))
}

/// Settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Operating timezone
    Timezone,
    /// Decimal places for prices
    Precision,
    /// Default output format
    DefaultFormat,
    /// Hour the trading day opens
    SessionOpenHour,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    /// Returns the key as stored in the settings file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timezone => "timezone",
            Self::Precision => "precision",
            Self::DefaultFormat => "default_format",
            Self::SessionOpenHour => "session_open_hour",
            Self::UseColors => "use_colors",
        }
    }

    /// Returns a one-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Timezone => "Operating timezone, IANA name (e.g. Asia/Karachi)",
            Self::Precision => "Decimal places for prices (2-12)",
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::SessionOpenHour => "Hour the trading day opens (0-23)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    /// Returns all keys in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Timezone,
            Self::Precision,
            Self::DefaultFormat,
            Self::SessionOpenHour,
            Self::UseColors,
        ]
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = CliError;

    fn from_str(s: &str) -> CliResult<Self> {
        match s.to_lowercase().as_str() {
            "timezone" | "tz" => Ok(Self::Timezone),
            "precision" | "decimal_precision" => Ok(Self::Precision),
            "default_format" | "format" => Ok(Self::DefaultFormat),
            "session_open_hour" | "open_hour" => Ok(Self::SessionOpenHour),
            "use_colors" | "colors" => Ok(Self::UseColors),
            _ => Err(CliError::UnknownConfigKey(s.to_string())),
        }
    }
}
