//! Civil (wall-clock) time in the operating timezone.
//!
//! User-facing timestamps are `YYYY-MM-DD HH:MM` strings read as local time
//! in a single fixed timezone. The extrapolators work on epoch seconds.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use std::fmt::Display;

use crate::error::{CoreError, CoreResult};

/// Format of every civil date/time accepted or displayed.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Default operating timezone (Pakistan Standard Time, UTC+05:00, no DST).
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Karachi;

/// Looks up an IANA timezone by name, e.g. `"Asia/Karachi"`.
///
/// # Errors
///
/// Returns `CoreError::UnknownTimezone` if the name is not in the database.
pub fn parse_timezone(name: &str) -> CoreResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| CoreError::unknown_timezone(name))
}

/// Parses `YYYY-MM-DD HH:MM` as local wall-clock time in `tz`.
///
/// A local time that occurs twice (DST fold) resolves to the earlier instant.
///
/// # Errors
///
/// Returns `CoreError::InputParse` if the text does not match the format or
/// names a local time that does not exist in `tz` (DST gap).
pub fn parse_local_datetime<Z: TimeZone>(input: &str, tz: &Z) -> CoreResult<DateTime<Z>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), DATETIME_FORMAT)
        .map_err(|e| CoreError::input_parse(input, e.to_string()))?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => {
            log::debug!("ambiguous local time {naive}, using the earlier instant");
            Ok(earliest)
        }
        LocalResult::None => Err(CoreError::input_parse(
            input,
            "local time does not exist in the operating timezone",
        )),
    }
}

/// Returns seconds since the Unix epoch, including the sub-second part.
#[must_use]
pub fn epoch_seconds<Z: TimeZone>(dt: &DateTime<Z>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9
}

/// Parses `YYYY-MM-DD HH:MM` in `tz` straight to epoch seconds.
pub fn parse_epoch_time<Z: TimeZone>(input: &str, tz: &Z) -> CoreResult<f64> {
    parse_local_datetime(input, tz).map(|dt| epoch_seconds(&dt))
}

/// Formats an instant as `YYYY-MM-DD HH:MM` in its own timezone.
#[must_use]
pub fn format_civil<Z: TimeZone>(dt: &DateTime<Z>) -> String
where
    Z::Offset: Display,
{
    dt.format(DATETIME_FORMAT).to_string()
}
