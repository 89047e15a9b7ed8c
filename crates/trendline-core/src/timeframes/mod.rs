//! Timeframe bucket boundaries.
//!
//! Truncates an instant to the start of the bucket it falls in, using the
//! local wall-clock fields of the instant's own timezone.
//!
//! | Timeframe | Bucket start |
//! |-----------|--------------|
//! | Monthly | Day 1 of the month at the session hour |
//! | Weekly | Monday of the week at the session hour |
//! | Daily | Today at the session hour |
//! | 4-Hourly | Latest of 01:00, 05:00, 09:00, ... (default session) |
//! | 1-Hourly | Top of the hour |
//! | 15-Minute | :00, :15, :30 or :45 |
//! | 1-Minute | Top of the minute |
//! | Unrecognized | The instant itself |
//!
//! # Truncation Semantics
//!
//! Day-and-above buckets replace the time of day with the session hour
//! without rolling back a day. Before 05:00 the "daily" boundary is therefore
//! later the same day, not the previous session's open: at `2025-03-07 02:30`
//! the daily boundary is `2025-03-07 05:00`. The same applies to the weekly
//! boundary on a Monday and the monthly boundary on day 1.

mod boundary;

pub use boundary::boundary_start;
