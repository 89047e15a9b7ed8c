//! End-to-end forecasts from civil-time inputs.
//!
//! Reproduces the calculator's default submission: anchors at 1.0 and 10.0
//! on 2025-01-01 and 2025-03-01 (05:00 Karachi), target 2025-03-07 05:00.

use approx::assert_relative_eq;
use chrono::Duration;
use trendline_core::prelude::*;
use trendline_forecast::prelude::*;

const START: &str = "2025-01-01 05:00";
const END: &str = "2025-03-01 05:00";
const TARGET: &str = "2025-03-07 05:00";

fn default_trend() -> Trend {
    Trend::from_civil(1.0, 10.0, START, END, &DEFAULT_TIMEZONE).unwrap()
}

#[test]
fn test_explicit_target_matches_hand_computed_reference() {
    let t0 = parse_epoch_time(START, &DEFAULT_TIMEZONE).unwrap();
    let t1 = parse_epoch_time(END, &DEFAULT_TIMEZONE).unwrap();
    let t2 = parse_epoch_time(TARGET, &DEFAULT_TIMEZONE).unwrap();
    let ratio = (t2 - t1) / (t1 - t0);

    let forecast = Forecaster::new(default_trend()).at(t2);
    assert_relative_eq!(
        forecast.logarithmic.unwrap(),
        10.0 * 10f64.powf(ratio),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        forecast.linear.unwrap(),
        10.0 + 9.0 * ratio,
        max_relative = 1e-12
    );
}

#[test]
fn test_auto_detect_uses_one_reference_instant() {
    let now = parse_local_datetime("2025-03-10 04:59", &DEFAULT_TIMEZONE).unwrap()
        + Duration::seconds(59);
    let clock = FixedClock::new(&now);

    let sampled = clock.now_in(&DEFAULT_TIMEZONE);
    let rows = Forecaster::new(default_trend()).auto_detect(&sampled);

    let shown: Vec<String> = rows.iter().map(|row| format_civil(&row.boundary)).collect();
    assert_eq!(
        shown,
        vec![
            "2025-03-01 05:00",
            // Monday before the open: no rollback to the previous week
            "2025-03-10 05:00",
            "2025-03-10 05:00",
            "2025-03-10 01:00",
            "2025-03-10 04:00",
            "2025-03-10 04:45",
            "2025-03-10 04:59",
        ]
    );
}

#[test]
fn test_predictions_grow_with_later_boundaries() {
    let now = parse_local_datetime("2025-03-07 13:59", &DEFAULT_TIMEZONE).unwrap();
    let rows = Forecaster::new(default_trend()).auto_detect(&now);

    // Boundaries are ordered monthly..1-minute, which is non-decreasing in time
    // here, and the trend is rising.
    for pair in rows.windows(2) {
        assert!(pair[0].boundary <= pair[1].boundary);
        let earlier = pair[0].forecast.logarithmic.clone().unwrap();
        let later = pair[1].forecast.logarithmic.clone().unwrap();
        assert!(earlier <= later);
    }
}

#[test]
fn test_malformed_time_halts_submission() {
    let err = Trend::from_civil(1.0, 10.0, "2025/01/01 05:00", END, &DEFAULT_TIMEZONE).unwrap_err();
    assert!(matches!(err, ForecastError::Core(CoreError::InputParse { .. })));
    assert!(err.to_string().contains("YYYY-MM-DD HH:MM"));
}

#[test]
fn test_other_operating_timezone() {
    let tz = parse_timezone("UTC").unwrap();
    let trend = Trend::from_civil(1.0, 10.0, START, END, &tz).unwrap();
    // Same wall-clock anchors, shifted by the zone offset
    assert_eq!(
        trend.start().time - default_trend().start().time,
        5.0 * 3600.0
    );
}
