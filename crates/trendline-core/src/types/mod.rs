//! Domain types for Trendline.

mod civil;
mod session;
mod timeframe;

pub use civil::{
    epoch_seconds, format_civil, parse_epoch_time, parse_local_datetime, parse_timezone,
    DATETIME_FORMAT, DEFAULT_TIMEZONE,
};
pub use session::TradingSession;
pub use timeframe::Timeframe;
