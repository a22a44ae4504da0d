//! Weekly CSV output and the console confirmation

use crate::config::EmaSpans;
use crate::data::{WeeklyBar, WeeklyTable};
use crate::error::{Result, WeeklyError};
use crate::timestamp::WEEK_DATE_FORMAT;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Header row of a weekly file
pub fn header(spans: EmaSpans) -> Vec<String> {
    let [fast, slow] = spans.column_names();
    ["DateTime", "Open", "High", "Low", "Close", "Volume"]
        .into_iter()
        .map(String::from)
        .chain([fast, slow])
        .collect()
}

/// Shortest round-trip form, keeping a `.0` on integral values
pub fn format_price(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Volumes print without a fractional part when they have none
pub fn format_volume(value: f64) -> String {
    value.to_string()
}

fn row(bar: &WeeklyBar) -> [String; 8] {
    [
        bar.week_end.format(WEEK_DATE_FORMAT).to_string(),
        format_price(bar.open),
        format_price(bar.high),
        format_price(bar.low),
        format_price(bar.close),
        format_volume(bar.volume),
        format_price(bar.ema_fast),
        format_price(bar.ema_slow),
    ]
}

/// Write the table as CSV with a header row
pub fn write_weekly<W: Write>(writer: W, table: &WeeklyTable) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(header(table.spans()))?;
    for bar in table.bars() {
        wtr.write_record(row(bar))?;
    }
    wtr.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Write the table to `path`, replacing any existing file
pub fn write_weekly_csv<P: AsRef<Path>>(path: P, table: &WeeklyTable) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| WeeklyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    write_weekly(BufWriter::new(file), table)?;
    info!(path = %path.display(), weeks = table.len(), "wrote weekly bars");
    Ok(())
}

/// Summary line plus the last `rows` weeks as an aligned table
pub fn format_preview(table: &WeeklyTable, rows: usize) -> String {
    let mut out = format!("✅ Weekly data saved: {} weeks\n", table.len());
    if rows == 0 || table.is_empty() {
        return out;
    }

    let mut lines = vec![header(table.spans())];
    lines.extend(table.tail(rows).iter().map(|bar| row(bar).to_vec()));

    let widths: Vec<usize> = (0..lines[0].len())
        .map(|col| lines.iter().map(|line| line[col].len()).max().unwrap_or(0))
        .collect();

    for line in &lines {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, &width))| {
                if col == 0 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }

    out
}
