//! The load → resample → smooth → save run

use crate::config::ResampleConfig;
use crate::data::{load_bars, WeeklyTable};
use crate::error::{Result, WeeklyError};
use crate::indicators::attach_emas;
use crate::resample::resample_weekly;
use crate::writer::write_weekly_csv;
use tracing::info;

/// Convert the configured 5-minute file into a weekly file.
///
/// Returns the table that was written. Nothing is written when the input
/// produces no weeks.
pub fn convert(config: &ResampleConfig) -> Result<WeeklyTable> {
    config.validate()?;

    let bars = load_bars(&config.input)?;
    let weeks = resample_weekly(&bars, config.week_end);
    if weeks.is_empty() {
        return Err(WeeklyError::EmptyResult);
    }

    let table = attach_emas(weeks, config.spans)?;
    write_weekly_csv(&config.output, &table)?;

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        bars = bars.len(),
        weeks = table.len(),
        "weekly conversion complete"
    );
    Ok(table)
}
