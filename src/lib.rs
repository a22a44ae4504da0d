//! # Weekly Bars Workspace
//!
//! Facade over the workspace crates:
//!
//! - [`weekly_bars`]: load 5-minute OHLCV bars, resample them to weeks and
//!   write the weekly CSV with EMA columns
//! - [`trade_math`]: the indicator math behind the EMA columns
//!
//! ## Example
//!
//! ```
//! use weekly_bars_workspace::trade_math::ema_series;
//!
//! let ema = ema_series(&[1.0, 2.0], 3).unwrap();
//! assert_eq!(ema, vec![1.0, 1.5]);
//! ```

pub use trade_math;
pub use weekly_bars;
