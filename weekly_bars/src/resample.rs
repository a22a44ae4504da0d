//! Weekly resampling of intraday bars
//!
//! Every bar is assigned to the week ending on the first `week_end` weekday on
//! or after its calendar date. Each non-empty week reduces to one
//! [`WeeklyAggregate`]:
//!
//! | column | rule                        |
//! |--------|-----------------------------|
//! | open   | open of the earliest bar    |
//! | high   | maximum high                |
//! | low    | minimum low                 |
//! | close  | close of the latest bar     |
//! | volume | sum of volumes              |
//!
//! Weeks without bars never appear in the output.

use crate::data::Bar;
use crate::timestamp::week_ending;
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use std::collections::BTreeMap;
use tracing::debug;

/// One week of OHLCV before indicators are attached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyAggregate {
    pub week_end: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy)]
struct WeekAccumulator {
    first_seen: NaiveDateTime,
    last_seen: NaiveDateTime,
    aggregate: WeeklyAggregate,
}

impl WeekAccumulator {
    fn start(week_end: NaiveDate, bar: &Bar) -> Self {
        Self {
            first_seen: bar.timestamp,
            last_seen: bar.timestamp,
            aggregate: WeeklyAggregate {
                week_end,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
            },
        }
    }

    fn absorb(&mut self, bar: &Bar) {
        let week = &mut self.aggregate;

        // Ties keep the earlier row as first and the later row as last
        if bar.timestamp < self.first_seen {
            self.first_seen = bar.timestamp;
            week.open = bar.open;
        }
        if bar.timestamp >= self.last_seen {
            self.last_seen = bar.timestamp;
            week.close = bar.close;
        }

        week.high = week.high.max(bar.high);
        week.low = week.low.min(bar.low);
        week.volume += bar.volume;
    }
}

/// Group bars into weeks ending on `week_end` and reduce each week.
///
/// Output is ordered by week. Input order only matters between bars that
/// share a timestamp.
pub fn resample_weekly(bars: &[Bar], week_end: Weekday) -> Vec<WeeklyAggregate> {
    let mut weeks: BTreeMap<NaiveDate, WeekAccumulator> = BTreeMap::new();

    for bar in bars {
        let key = week_ending(bar.timestamp.date(), week_end);
        weeks
            .entry(key)
            .and_modify(|week| week.absorb(bar))
            .or_insert_with(|| WeekAccumulator::start(key, bar));
    }

    debug!(
        bars = bars.len(),
        weeks = weeks.len(),
        week_end = %week_end,
        "resampled to weekly"
    );

    weeks.into_values().map(|week| week.aggregate).collect()
}
