//! Property-based tests for timeframe boundaries in the default timezone.
//!
//! - Buckets of an hour or less never start after `now`
//! - Every boundary has its sub-granularity fields zeroed
//! - Truncating a boundary again is a no-op
//! - Unrecognized timeframes are the identity

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use proptest::prelude::*;
use trendline_core::prelude::*;

/// Instants between 2001 and 2033, with sub-second noise.
fn karachi_instant() -> impl Strategy<Value = DateTime<Tz>> {
    (1_000_000_000i64..2_000_000_000i64, 0u32..1_000_000_000u32).prop_map(|(secs, nanos)| {
        Utc.timestamp_opt(secs, nanos)
            .single()
            .map(|utc| utc.with_timezone(&DEFAULT_TIMEZONE))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn intraday_boundaries_not_after_now(now in karachi_instant()) {
        for (tf, width) in [
            (Timeframe::FourHourly, Duration::hours(4)),
            (Timeframe::Hourly, Duration::hours(1)),
            (Timeframe::FifteenMinute, Duration::minutes(15)),
            (Timeframe::OneMinute, Duration::minutes(1)),
        ] {
            let start = boundary_start(tf, &now);
            prop_assert!(start <= now, "{} start {} after {}", tf, start, now);
            prop_assert!(now - start < width);
        }
    }

    #[test]
    fn session_boundaries_open_at_five(now in karachi_instant()) {
        for tf in [Timeframe::Monthly, Timeframe::Weekly, Timeframe::Daily] {
            let start = boundary_start(tf, &now);
            prop_assert_eq!((start.hour(), start.minute(), start.second()), (5, 0, 0));
            prop_assert_eq!(start.nanosecond(), 0);
        }

        let daily = boundary_start(Timeframe::Daily, &now);
        prop_assert_eq!(daily.date_naive(), now.date_naive());

        let weekly = boundary_start(Timeframe::Weekly, &now);
        prop_assert_eq!(weekly.weekday(), Weekday::Mon);
        prop_assert!(now.date_naive() - weekly.date_naive() < Duration::days(7));

        let monthly = boundary_start(Timeframe::Monthly, &now);
        prop_assert_eq!(monthly.day(), 1);
        prop_assert_eq!(monthly.month(), now.month());
    }

    #[test]
    fn boundaries_are_idempotent(now in karachi_instant()) {
        for tf in Timeframe::all() {
            let once = boundary_start(*tf, &now);
            let twice = boundary_start(*tf, &once);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn unrecognized_is_identity(now in karachi_instant()) {
        prop_assert_eq!(boundary_start(Timeframe::Unrecognized, &now), now);
        prop_assert_eq!(boundary_start(Timeframe::from_tag("quarterly"), &now), now);
    }
}
