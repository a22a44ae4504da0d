//! # Trade Math
//!
//! Mathematical calculations for trading indicators.
//! This crate provides the exponential moving average used for weekly trend
//! columns and single-candle geometry.

use thiserror::Error;

// Indicator modules
pub mod candles;
pub mod moving_averages;

pub use candles::CandleShape;
pub use moving_averages::{ema_series, ExponentialMovingAverage};

/// Errors that can occur in trading-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for trading math operations
pub type Result<T> = std::result::Result<T, MathError>;
