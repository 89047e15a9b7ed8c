//! Bucket start calculation.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike,
};

use crate::types::{Timeframe, TradingSession};

/// Returns the start of the `timeframe` bucket containing `now`, using the
/// default 05:00 trading session.
///
/// The result is in the same timezone as `now`. See the
/// [module docs](crate::timeframes) for the rules.
///
/// # Example
///
/// ```rust
/// use trendline_core::prelude::*;
///
/// let now = parse_local_datetime("2025-03-07 02:30", &DEFAULT_TIMEZONE).unwrap();
/// let daily = boundary_start(Timeframe::Daily, &now);
/// assert_eq!(format_civil(&daily), "2025-03-07 05:00");
/// ```
#[must_use]
pub fn boundary_start<Tz: TimeZone>(timeframe: Timeframe, now: &DateTime<Tz>) -> DateTime<Tz> {
    TradingSession::default().boundary_start(timeframe, now)
}

impl TradingSession {
    /// Returns the start of the `timeframe` bucket containing `now` under this
    /// session.
    #[must_use]
    pub fn boundary_start<Tz: TimeZone>(
        &self,
        timeframe: Timeframe,
        now: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        let local = now.naive_local();
        let date = local.date();

        let start = match timeframe {
            Timeframe::Monthly => {
                let first = date - Duration::days(i64::from(date.day0()));
                self.session_open(first)
            }
            Timeframe::Weekly => {
                let monday =
                    date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
                self.session_open(monday)
            }
            Timeframe::Daily => self.session_open(date),
            Timeframe::FourHourly => {
                let anchor = i64::from(self.four_hour_anchor());
                // Floor division: before the first bucket of the day this
                // lands on the last bucket of the previous day.
                let hour = (i64::from(local.hour()) - anchor).div_euclid(4) * 4 + anchor;
                midnight(date) + Duration::hours(hour)
            }
            Timeframe::Hourly => midnight(date) + Duration::hours(i64::from(local.hour())),
            Timeframe::FifteenMinute => {
                let minute = local.minute() / 15 * 15;
                midnight(date)
                    + Duration::hours(i64::from(local.hour()))
                    + Duration::minutes(i64::from(minute))
            }
            Timeframe::OneMinute => {
                midnight(date)
                    + Duration::hours(i64::from(local.hour()))
                    + Duration::minutes(i64::from(local.minute()))
            }
            Timeframe::Unrecognized => return now.clone(),
        };

        log::trace!("{timeframe} bucket for {local} starts at {start}");
        localize(start, now)
    }

    fn session_open(&self, date: NaiveDate) -> NaiveDateTime {
        midnight(date) + Duration::hours(i64::from(self.open_hour()))
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Maps a local wall-clock time back to an instant in `now`'s timezone.
///
/// A fold resolves to the earlier instant; a gap uses `now`'s UTC offset.
fn localize<Tz: TimeZone>(local: NaiveDateTime, now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let offset = now.offset().fix();
            tz.from_utc_datetime(&(local - offset))
        }
    }
}
