//! Bar timestamp parsing and week bucketing

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use thiserror::Error;

/// chrono format of the bar timestamp column, e.g. `2025.08.07 20:50`
pub const BAR_TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M";

/// chrono format of the weekly date column, e.g. `2025-08-10`
pub const WEEK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Shape of a bar timestamp: `YYYY.MM.DD HH:mm`
const BAR_TIMESTAMP_SHAPE: &[u8; 16] = b"dddd.dd.dd dd:dd";

/// A timestamp string that is not exactly `YYYY.MM.DD HH:mm`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("timestamp '{0}' does not match YYYY.MM.DD HH:mm")]
pub struct TimestampError(pub String);

/// Parse a bar timestamp.
///
/// The string must match the format exactly: zero-padded fields, no seconds,
/// no surrounding whitespace. Out-of-range values such as month 13 are rejected too.
pub fn parse_bar_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    if !matches_shape(value) {
        return Err(TimestampError(value.to_string()));
    }

    NaiveDateTime::parse_from_str(value, BAR_TIMESTAMP_FORMAT)
        .map_err(|_| TimestampError(value.to_string()))
}

fn matches_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == BAR_TIMESTAMP_SHAPE.len()
        && bytes
            .iter()
            .zip(BAR_TIMESTAMP_SHAPE)
            .all(|(&b, &expected)| match expected {
                b'd' => b.is_ascii_digit(),
                other => b == other,
            })
}

/// Date of the first `week_end` weekday on or after `date`.
///
/// This is the label of the weekly bucket containing `date`. A bar on the
/// week-end day itself belongs to the week ending that day.
pub fn week_ending(date: NaiveDate, week_end: Weekday) -> NaiveDate {
    let ahead = (7 + week_end.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    date + Days::new(u64::from(ahead))
}
