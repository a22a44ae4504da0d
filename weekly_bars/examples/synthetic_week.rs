//! Synthetic Week Example
//!
//! This example demonstrates how to:
//! 1. Generate a few weeks of 5-minute bars
//! 2. Resample them into weekly bars ending on Sunday
//! 3. Attach the EMA12/EMA26 columns
//! 4. Print the result the way the converter does

use chrono::{Duration, Weekday};
use weekly_bars::indicators::attach_emas;
use weekly_bars::resample::resample_weekly;
use weekly_bars::timestamp::parse_bar_timestamp;
use weekly_bars::writer::{format_preview, write_weekly};
use weekly_bars::{Bar, EmaSpans};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three weeks of 5-minute bars starting Monday 2024-01-01
    let start = parse_bar_timestamp("2024.01.01 00:00")?;
    let bars: Vec<Bar> = (0..(21 * 24 * 12))
        .map(|step| {
            let drift = step as f64 * 0.000002;
            let wave = ((step as f64) / 288.0).sin() * 0.004;
            let price = 1.10 + drift + wave;
            Bar {
                timestamp: start + Duration::minutes(5 * step),
                open: price,
                high: price + 0.0003,
                low: price - 0.0003,
                close: price + 0.0001,
                volume: (100 + step % 40) as f64,
            }
        })
        .collect();
    println!("Generated {} 5-minute bars", bars.len());

    let weeks = resample_weekly(&bars, Weekday::Sun);
    let table = attach_emas(weeks, EmaSpans::default())?;

    println!();
    print!("{}", format_preview(&table, 5));

    println!("\nCSV output:");
    write_weekly(std::io::stdout().lock(), &table)?;

    println!("\nCandle shapes:");
    for bar in table.bars() {
        let shape = bar.shape();
        println!(
            "{}: range {:.5}, body {:.5}, upper wick {:.5}, lower wick {:.5}",
            bar.week_end, shape.range, shape.body, shape.upper_wick, shape.lower_wick
        );
    }

    Ok(())
}
