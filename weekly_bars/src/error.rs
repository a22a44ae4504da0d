//! Error types for the weekly_bars crate

use crate::timestamp::TimestampError;
use std::path::PathBuf;
use thiserror::Error;
use trade_math::MathError;

/// Custom error types for the weekly_bars crate
///
/// Every variant is fatal to a conversion run.
#[derive(Debug, Error)]
pub enum WeeklyError {
    /// Opening or creating a file failed (missing input, unwritable output)
    #[error("IO error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV reader or writer
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row did not have the expected number of columns
    #[error("Line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A timestamp field did not match the bar timestamp format
    #[error("Line {line}: {source}")]
    Timestamp {
        line: u64,
        #[source]
        source: TimestampError,
    },

    /// A numeric field could not be parsed as a finite number
    #[error("Line {line}: invalid {column} value '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// A weekly date field was not `YYYY-MM-DD`
    #[error("Line {line}: invalid week date '{value}'")]
    InvalidDate { line: u64, value: String },

    /// A weekly file did not start with the expected header
    #[error("Unexpected header: expected '{expected}', found '{found}'")]
    Header { expected: String, found: String },

    /// Resampling produced no weekly rows
    #[error("No weekly bars produced: the input contained no rows")]
    EmptyResult,

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from indicator math
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, WeeklyError>;
