//! # Trendline Core
//!
//! Core types and civil-time logic for the Trendline price projection toolkit.
//!
//! This crate provides the building blocks shared by the forecast engine and
//! the command-line shell:
//!
//! - **Types**: `Timeframe` tags, the `TradingSession` convention and
//!   civil-time parsing/formatting in an operating timezone
//! - **Timeframes**: Truncation of an instant to the start of its timeframe
//!   bucket
//! - **Clock**: An injectable source of "now"
//!
//! ## Design Philosophy
//!
//! - **Explicit Over Implicit**: The current instant and the timezone are
//!   always parameters, never read from the environment
//! - **Wall-Clock Arithmetic**: Buckets are cut on local fields
//!   (year/month/day/hour/minute) of the operating timezone
//!
//! ## Example
//!
//! ```rust
//! use trendline_core::prelude::*;
//!
//! let tz = DEFAULT_TIMEZONE;
//! let now = parse_local_datetime("2025-03-07 13:59", &tz).unwrap();
//!
//! let start = boundary_start(Timeframe::FourHourly, &now);
//! assert_eq!(format_civil(&start), "2025-03-07 13:00");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]

pub mod clock;
pub mod error;
pub mod timeframes;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::timeframes::boundary_start;
    pub use crate::types::{
        epoch_seconds, format_civil, parse_epoch_time, parse_local_datetime, parse_timezone,
        Timeframe, TradingSession, DATETIME_FORMAT, DEFAULT_TIMEZONE,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use timeframes::boundary_start;
pub use types::{Timeframe, TradingSession};
