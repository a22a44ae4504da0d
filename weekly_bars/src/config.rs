//! Run configuration for a weekly conversion

use crate::error::{Result, WeeklyError};
use chrono::Weekday;
use std::path::PathBuf;

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "mt4_ready/eurusd-m5-bid-2015-01-01-2025-08-08_MT4.csv";

/// Output file written when no path is given
pub const DEFAULT_OUTPUT: &str = "EURUSD_weekly_2015_2025.csv";

/// Number of trailing weeks echoed after a successful run
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Spans of the two EMA columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmaSpans {
    /// Faster (shorter) span
    pub fast: usize,
    /// Slower (longer) span
    pub slow: usize,
}

impl EmaSpans {
    /// Create a validated pair of spans
    pub fn new(fast: usize, slow: usize) -> Result<Self> {
        let spans = Self { fast, slow };
        spans.validate()?;
        Ok(spans)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fast == 0 || self.slow == 0 {
            return Err(WeeklyError::InvalidParameter(
                "EMA spans must be greater than zero".to_string(),
            ));
        }
        if self.fast >= self.slow {
            return Err(WeeklyError::InvalidParameter(format!(
                "fast EMA span ({}) must be shorter than slow span ({})",
                self.fast, self.slow
            )));
        }
        Ok(())
    }

    /// Column names of the two EMA columns, e.g. `EMA12` and `EMA26`
    pub fn column_names(&self) -> [String; 2] {
        [format!("EMA{}", self.fast), format!("EMA{}", self.slow)]
    }
}

impl Default for EmaSpans {
    fn default() -> Self {
        Self { fast: 12, slow: 26 }
    }
}

/// Everything a single conversion run needs
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleConfig {
    /// Headerless 5-minute CSV to read
    pub input: PathBuf,
    /// Weekly CSV to (over)write
    pub output: PathBuf,
    /// Weekday every bucket ends on
    pub week_end: Weekday,
    /// EMA spans over the weekly close
    pub spans: EmaSpans,
    /// Trailing rows shown in the confirmation
    pub preview_rows: usize,
}

impl ResampleConfig {
    /// Configuration with the given paths and default everything else
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn with_week_end(mut self, week_end: Weekday) -> Self {
        self.week_end = week_end;
        self
    }

    pub fn with_spans(mut self, spans: EmaSpans) -> Self {
        self.spans = spans;
        self
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Check the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        self.spans.validate()?;
        if self.input == self.output {
            return Err(WeeklyError::InvalidParameter(format!(
                "output path {:?} would overwrite the input",
                self.output
            )));
        }
        Ok(())
    }
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            week_end: Weekday::Sun,
            spans: EmaSpans::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}
