//! # Weekly Bars
//!
//! Resamples 5-minute OHLCV bars into weekly bars and attaches two
//! exponential moving averages of the weekly close.
//!
//! ## Pipeline
//!
//! 1. [`data::load_bars`] reads a headerless CSV (`DateTime,Open,High,Low,Close,Volume`)
//! 2. [`timestamp::parse_bar_timestamp`] parses `YYYY.MM.DD HH:mm` timestamps
//! 3. [`resample::resample_weekly`] buckets bars into weeks ending on a fixed weekday
//! 4. [`indicators::attach_emas`] adds the EMA12/EMA26 columns
//! 5. [`writer::write_weekly_csv`] writes `DateTime,Open,High,Low,Close,Volume,EMA12,EMA26`
//!
//! ## Quick Start
//!
//! ```no_run
//! use weekly_bars::{convert, ResampleConfig};
//! use weekly_bars::writer::format_preview;
//!
//! let config = ResampleConfig::new("eurusd_m5.csv", "eurusd_weekly.csv");
//! let table = convert(&config)?;
//! print!("{}", format_preview(&table, config.preview_rows));
//! # Ok::<(), weekly_bars::WeeklyError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod pipeline;
pub mod resample;
pub mod timestamp;
pub mod writer;

// Re-export commonly used types
pub use crate::config::{EmaSpans, ResampleConfig};
pub use crate::data::{Bar, WeeklyBar, WeeklyTable};
pub use crate::error::{Result, WeeklyError};
pub use crate::pipeline::convert;
pub use crate::resample::WeeklyAggregate;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
