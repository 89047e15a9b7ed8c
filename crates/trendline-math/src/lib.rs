//! # Trendline Math
//!
//! Extrapolation of a price trend drawn through two anchor points.
//!
//! This crate provides:
//!
//! - **Anchor points**: `(time, price)` samples on a shared epoch-seconds scale
//! - **Extrapolation**: Logarithmic (constant growth rate) and linear (constant
//!   absolute change) projection to any target time
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: No state, no clocks, no I/O
//! - **Explicit Domains**: Zero time spans and non-positive log prices are
//!   reported as errors instead of leaking `inf`/`NaN`
//!
//! ## Example
//!
//! ```rust
//! use trendline_math::{predict, TrendModel};
//!
//! // Price went from 1.0 to 10.0 over 100 seconds
//! let log_price = predict(TrendModel::Logarithmic, 1.0, 10.0, 0.0, 100.0, 200.0).unwrap();
//! assert!((log_price - 100.0).abs() < 1e-9);
//!
//! let linear_price = predict(TrendModel::Linear, 1.0, 10.0, 0.0, 100.0, 200.0).unwrap();
//! assert!((linear_price - 19.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod extrapolation;
pub mod point;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{
        predict, Extrapolator, LinearExtrapolator, LogarithmicExtrapolator, TrendModel,
    };
    pub use crate::point::AnchorPoint;
}

pub use error::{MathError, MathResult};
pub use extrapolation::{predict, TrendModel};
pub use point::AnchorPoint;
