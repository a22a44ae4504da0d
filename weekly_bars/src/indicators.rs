//! Trend columns over the weekly close

use crate::config::EmaSpans;
use crate::data::{WeeklyBar, WeeklyTable};
use crate::error::Result;
use crate::resample::WeeklyAggregate;
use tracing::debug;
use trade_math::ema_series;

/// Attach the fast and slow EMA of the weekly close to every week.
///
/// Both averages are seeded with the first close, so every week gets a value.
pub fn attach_emas(weeks: Vec<WeeklyAggregate>, spans: EmaSpans) -> Result<WeeklyTable> {
    spans.validate()?;

    let closes: Vec<f64> = weeks.iter().map(|week| week.close).collect();
    let fast = ema_series(&closes, spans.fast)?;
    let slow = ema_series(&closes, spans.slow)?;

    let bars = weeks
        .into_iter()
        .zip(fast.into_iter().zip(slow))
        .map(|(week, (ema_fast, ema_slow))| WeeklyBar {
            week_end: week.week_end,
            open: week.open,
            high: week.high,
            low: week.low,
            close: week.close,
            volume: week.volume,
            ema_fast,
            ema_slow,
        })
        .collect::<Vec<_>>();

    debug!(weeks = bars.len(), fast = spans.fast, slow = spans.slow, "computed EMAs");
    Ok(WeeklyTable::new(spans, bars))
}
