//! Bar types and CSV loading

use crate::config::EmaSpans;
use crate::error::{Result, WeeklyError};
use crate::timestamp::{parse_bar_timestamp, WEEK_DATE_FORMAT};
use crate::writer::header;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};
use trade_math::CandleShape;

/// Columns in a headerless bar file: DateTime,Open,High,Low,Close,Volume
pub const BAR_COLUMNS: usize = 6;

/// Columns in a weekly file: DateTime,Open,High,Low,Close,Volume,EMA<fast>,EMA<slow>
pub const WEEKLY_COLUMNS: usize = 8;

const NUMERIC_COLUMNS: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// One source OHLCV row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Bar open time
    pub timestamp: NaiveDateTime,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    pub volume: f64,
}

/// One aggregated week with its trend columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyBar {
    /// Last calendar day of the week, used as the row label
    pub week_end: NaiveDate,
    /// Open of the first bar in the week
    pub open: f64,
    /// Highest high in the week
    pub high: f64,
    /// Lowest low in the week
    pub low: f64,
    /// Close of the last bar in the week
    pub close: f64,
    /// Total volume in the week
    pub volume: f64,
    /// EMA of weekly closes over the fast span
    pub ema_fast: f64,
    /// EMA of weekly closes over the slow span
    pub ema_slow: f64,
}

impl WeeklyBar {
    /// Geometry of this week's candle
    pub fn shape(&self) -> CandleShape {
        CandleShape::from_ohlc(self.open, self.high, self.low, self.close)
    }
}

/// Weekly bars in chronological order, with the spans their EMAs used
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTable {
    spans: EmaSpans,
    bars: Vec<WeeklyBar>,
}

impl WeeklyTable {
    pub fn new(spans: EmaSpans, bars: Vec<WeeklyBar>) -> Self {
        Self { spans, bars }
    }

    pub fn spans(&self) -> EmaSpans {
        self.spans
    }

    pub fn bars(&self) -> &[WeeklyBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The last `n` weeks (all of them if there are fewer)
    pub fn tail(&self, n: usize) -> &[WeeklyBar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }

    /// Weekly closes in order
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }
}

/// Load 5-minute bars from a headerless CSV file.
///
/// The expected CSV format is:
/// 2025.08.07 20:50,1.16581,1.16592,1.16571,1.16589,312
///
/// Bars come back sorted by timestamp; rows sharing a timestamp keep their file order.
pub fn load_bars<P: AsRef<Path>>(path: P) -> Result<Vec<Bar>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WeeklyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bars = read_bars(BufReader::new(file))?;
    info!(path = %path.display(), bars = bars.len(), "loaded bars");
    Ok(bars)
}

/// Read headerless bar rows from any reader
pub fn read_bars<R: Read>(reader: R) -> Result<Vec<Bar>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut bars = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record_line(&record, bars.len());
        bars.push(parse_bar(&record, line)?);
    }

    // Stable, so duplicate timestamps keep file order
    bars.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    debug!(rows = bars.len(), "parsed bar rows");

    Ok(bars)
}

fn record_line(record: &StringRecord, parsed_so_far: usize) -> u64 {
    record
        .position()
        .map(|position| position.line())
        .unwrap_or(parsed_so_far as u64 + 1)
}

fn parse_bar(record: &StringRecord, line: u64) -> Result<Bar> {
    if record.len() != BAR_COLUMNS {
        return Err(WeeklyError::ColumnCount {
            line,
            expected: BAR_COLUMNS,
            found: record.len(),
        });
    }

    let timestamp = parse_bar_timestamp(&record[0])
        .map_err(|source| WeeklyError::Timestamp { line, source })?;

    let mut values = [0.0; 5];
    for (i, column) in NUMERIC_COLUMNS.into_iter().enumerate() {
        values[i] = parse_number(&record[i + 1], column, line)?;
    }
    let [open, high, low, close, volume] = values;

    Ok(Bar {
        timestamp,
        open,
        high,
        low,
        close,
        volume,
    })
}

fn parse_number(field: &str, column: &'static str, line: u64) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(WeeklyError::InvalidNumber {
            line,
            column,
            value: field.to_string(),
        }),
    }
}

/// Positional layout of a weekly row
#[derive(Debug, Deserialize)]
struct WeeklyRecord(String, f64, f64, f64, f64, f64, f64, f64);

/// Load a weekly CSV previously written by [`crate::writer::write_weekly_csv`]
pub fn load_weekly<P: AsRef<Path>>(path: P, spans: EmaSpans) -> Result<WeeklyTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WeeklyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_weekly(BufReader::new(file), spans)?;
    info!(path = %path.display(), weeks = table.len(), "loaded weekly bars");
    Ok(table)
}

/// Read a weekly CSV (with header) from any reader
pub fn read_weekly<R: Read>(reader: R, spans: EmaSpans) -> Result<WeeklyTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let expected = header(spans).join(",");
    let found = rdr.headers()?.iter().collect::<Vec<_>>().join(",");
    if found != expected {
        return Err(WeeklyError::Header { expected, found });
    }

    let mut bars = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record_line(&record, bars.len() + 1);
        if record.len() != WEEKLY_COLUMNS {
            return Err(WeeklyError::ColumnCount {
                line,
                expected: WEEKLY_COLUMNS,
                found: record.len(),
            });
        }

        let WeeklyRecord(date, open, high, low, close, volume, ema_fast, ema_slow) =
            record.deserialize(None)?;
        let week_end = NaiveDate::parse_from_str(&date, WEEK_DATE_FORMAT)
            .map_err(|_| WeeklyError::InvalidDate { line, value: date })?;

        bars.push(WeeklyBar {
            week_end,
            open,
            high,
            low,
            close,
            volume,
            ema_fast,
            ema_slow,
        });
    }

    Ok(WeeklyTable::new(spans, bars))
}
