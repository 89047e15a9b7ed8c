//! Trading timeframe tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A standard trading timeframe whose current bucket start can be computed.
///
/// `Unrecognized` is the explicit pass-through case: tags that name no
/// standard timeframe map to it, and its bucket start is the input instant
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// Calendar month, opening on day 1 at the session hour.
    #[serde(rename = "monthly")]
    Monthly,
    /// Week starting Monday at the session hour.
    #[serde(rename = "weekly")]
    Weekly,
    /// Day starting at the session hour.
    #[serde(rename = "daily")]
    Daily,
    /// Four-hour bucket aligned to the session hour.
    #[serde(rename = "4hourly")]
    FourHourly,
    /// One hour.
    #[serde(rename = "1hourly")]
    Hourly,
    /// Fifteen minutes.
    #[serde(rename = "15min")]
    FifteenMinute,
    /// One minute.
    #[serde(rename = "1min")]
    OneMinute,
    /// Any other tag; its boundary is the identity.
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl Timeframe {
    /// Maps a tag to a timeframe, falling back to [`Timeframe::Unrecognized`].
    ///
    /// Accepts the long tags (`monthly`, `4hourly`, `15min`, ...) and the
    /// short chart notation (`1M`, `4h`, `15m`, ...). Long tags are matched
    /// case-insensitively; `1M` (month) and `1m` (minute) are case-sensitive.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        match tag {
            "1M" => return Timeframe::Monthly,
            "1m" => return Timeframe::OneMinute,
            _ => {}
        }
        match tag.to_lowercase().as_str() {
            "monthly" => Timeframe::Monthly,
            "weekly" | "1w" => Timeframe::Weekly,
            "daily" | "1d" => Timeframe::Daily,
            "4hourly" | "4h" => Timeframe::FourHourly,
            "1hourly" | "hourly" | "1h" => Timeframe::Hourly,
            "15min" | "15m" => Timeframe::FifteenMinute,
            "1min" => Timeframe::OneMinute,
            _ => Timeframe::Unrecognized,
        }
    }

    /// Returns the canonical tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Timeframe::Monthly => "monthly",
            Timeframe::Weekly => "weekly",
            Timeframe::Daily => "daily",
            Timeframe::FourHourly => "4hourly",
            Timeframe::Hourly => "1hourly",
            Timeframe::FifteenMinute => "15min",
            Timeframe::OneMinute => "1min",
            Timeframe::Unrecognized => "unrecognized",
        }
    }

    /// Returns a display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Monthly => "Monthly",
            Timeframe::Weekly => "Weekly",
            Timeframe::Daily => "Daily",
            Timeframe::FourHourly => "4-Hourly",
            Timeframe::Hourly => "1-Hourly",
            Timeframe::FifteenMinute => "15-Minute",
            Timeframe::OneMinute => "1-Minute",
            Timeframe::Unrecognized => "Unrecognized",
        }
    }

    /// Returns the seven standard timeframes, longest first.
    #[must_use]
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Monthly,
            Timeframe::Weekly,
            Timeframe::Daily,
            Timeframe::FourHourly,
            Timeframe::Hourly,
            Timeframe::FifteenMinute,
            Timeframe::OneMinute,
        ]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    /// Strict parse: unknown tags are an error rather than `Unrecognized`.
    fn from_str(s: &str) -> CoreResult<Self> {
        match Timeframe::from_tag(s) {
            Timeframe::Unrecognized => Err(CoreError::unknown_timeframe(s)),
            timeframe => Ok(timeframe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_tags() {
        assert_eq!(Timeframe::from_tag("monthly"), Timeframe::Monthly);
        assert_eq!(Timeframe::from_tag("weekly"), Timeframe::Weekly);
        assert_eq!(Timeframe::from_tag("daily"), Timeframe::Daily);
        assert_eq!(Timeframe::from_tag("4hourly"), Timeframe::FourHourly);
        assert_eq!(Timeframe::from_tag("1hourly"), Timeframe::Hourly);
        assert_eq!(Timeframe::from_tag("15min"), Timeframe::FifteenMinute);
        assert_eq!(Timeframe::from_tag("1min"), Timeframe::OneMinute);
        assert_eq!(Timeframe::from_tag("Daily"), Timeframe::Daily);
    }

    #[test]
    fn test_short_tags() {
        assert_eq!(Timeframe::from_tag("1M"), Timeframe::Monthly);
        assert_eq!(Timeframe::from_tag("1m"), Timeframe::OneMinute);
        assert_eq!(Timeframe::from_tag("4h"), Timeframe::FourHourly);
        assert_eq!(Timeframe::from_tag("15m"), Timeframe::FifteenMinute);
    }

    #[test]
    fn test_unknown_tag_is_unrecognized() {
        assert_eq!(Timeframe::from_tag("yearly"), Timeframe::Unrecognized);
        assert_eq!(Timeframe::from_tag(""), Timeframe::Unrecognized);
        assert!("yearly".parse::<Timeframe>().is_err());
        assert_eq!("4hourly".parse::<Timeframe>().unwrap(), Timeframe::FourHourly);
    }

    #[test]
    fn test_tag_round_trip() {
        for tf in Timeframe::all() {
            assert_eq!(Timeframe::from_tag(tf.tag()), *tf);
        }
    }

    #[test]
    fn test_all_excludes_unrecognized() {
        assert_eq!(Timeframe::all().len(), 7);
        assert!(!Timeframe::all().contains(&Timeframe::Unrecognized));
        assert_eq!(Timeframe::all()[0], Timeframe::Monthly);
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Timeframe::FourHourly).unwrap();
        assert_eq!(json, "\"4hourly\"");
        let tf: Timeframe = serde_json::from_str("\"15min\"").unwrap();
        assert_eq!(tf, Timeframe::FifteenMinute);
    }
}
