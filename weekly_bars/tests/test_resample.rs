use chrono::{Duration, NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeMap;
use weekly_bars::data::read_bars;
use weekly_bars::resample::resample_weekly;
use weekly_bars::timestamp::{parse_bar_timestamp, week_ending};
use weekly_bars::Bar;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn bar(timestamp: &str, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
    Bar {
        timestamp: parse_bar_timestamp(timestamp).unwrap(),
        open,
        high,
        low,
        close,
        volume,
    }
}

/// Two full weeks of 5-minute bars with an empty week between them
fn multi_week_bars() -> Vec<Bar> {
    let start = parse_bar_timestamp("2024.01.01 00:00").unwrap();
    let mut bars = Vec::new();
    for step in 0..(7 * 24 * 12) {
        let timestamp = start + Duration::minutes(5 * step);
        // Odd steps land two weeks later, leaving the week ending 2024-01-14 empty
        let timestamp = if step % 2 == 0 {
            timestamp
        } else {
            timestamp + Duration::days(14)
        };
        let price = 1.0 + (step % 97) as f64 * 0.001;
        bars.push(Bar {
            timestamp,
            open: price,
            high: price + 0.002,
            low: price - 0.003,
            close: price + 0.001,
            volume: (step % 13) as f64,
        });
    }
    bars.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    bars
}

#[test]
fn test_single_week_scenario() {
    let bars = vec![
        bar("2024.01.02 10:00", 1.1000, 1.1025, 1.0990, 1.1005, 100.0),
        bar("2024.01.02 10:05", 1.1010, 1.1030, 1.0995, 1.1020, 150.0),
    ];

    let weeks = resample_weekly(&bars, Weekday::Sun);

    assert_eq!(weeks.len(), 1);
    let week = weeks[0];
    assert_eq!(week.week_end, date(2024, 1, 7));
    assert_eq!(week.open, 1.1000);
    assert_eq!(week.high, 1.1030);
    assert_eq!(week.low, 1.0990);
    assert_eq!(week.close, 1.1020);
    assert_eq!(week.volume, 250.0);
}

#[rstest]
#[case("2024.01.07 00:00", date(2024, 1, 7))]
#[case("2024.01.07 23:55", date(2024, 1, 7))]
#[case("2024.01.08 00:00", date(2024, 1, 14))]
#[case("2024.01.01 00:00", date(2024, 1, 7))]
#[case("2023.12.31 12:00", date(2023, 12, 31))]
fn test_sunday_week_boundaries(#[case] timestamp: &str, #[case] expected: NaiveDate) {
    let weeks = resample_weekly(&[bar(timestamp, 1.0, 1.0, 1.0, 1.0, 1.0)], Weekday::Sun);
    assert_eq!(weeks[0].week_end, expected);
}

#[rstest]
#[case(Weekday::Fri, date(2024, 1, 5), date(2024, 1, 12))]
#[case(Weekday::Sat, date(2024, 1, 6), date(2024, 1, 6))]
#[case(Weekday::Mon, date(2024, 1, 8), date(2024, 1, 8))]
fn test_custom_week_end(
    #[case] week_end: Weekday,
    #[case] friday_label: NaiveDate,
    #[case] saturday_label: NaiveDate,
) {
    let bars = vec![
        bar("2024.01.05 12:00", 1.0, 1.0, 1.0, 1.0, 1.0),
        bar("2024.01.06 12:00", 2.0, 2.0, 2.0, 2.0, 1.0),
    ];

    let labels: Vec<NaiveDate> = resample_weekly(&bars, week_end)
        .iter()
        .map(|week| week.week_end)
        .collect();

    let mut expected = vec![friday_label, saturday_label];
    expected.dedup();
    assert_eq!(labels, expected);
}

#[test]
fn test_empty_week_produces_no_row() {
    let weeks = resample_weekly(&multi_week_bars(), Weekday::Sun);
    let labels: Vec<NaiveDate> = weeks.iter().map(|week| week.week_end).collect();

    assert_eq!(labels, vec![date(2024, 1, 7), date(2024, 1, 21)]);
    assert!(!labels.contains(&date(2024, 1, 14)));
}

#[test]
fn test_aggregation_rules_hold_for_every_week() {
    let bars = multi_week_bars();
    let weeks = resample_weekly(&bars, Weekday::Sun);

    let mut grouped: BTreeMap<NaiveDate, Vec<&Bar>> = BTreeMap::new();
    for bar in &bars {
        grouped
            .entry(week_ending(bar.timestamp.date(), Weekday::Sun))
            .or_default()
            .push(bar);
    }

    assert_eq!(weeks.len(), grouped.len());
    for (week, (label, members)) in weeks.iter().zip(&grouped) {
        assert_eq!(week.week_end, *label);
        assert_eq!(week.open, members[0].open);
        assert_eq!(week.close, members[members.len() - 1].close);

        let high = members.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let low = members.iter().map(|b| b.low).fold(f64::MAX, f64::min);
        let volume: f64 = members.iter().map(|b| b.volume).sum();
        assert_eq!(week.high, high);
        assert_eq!(week.low, low);
        assert_eq!(week.volume, volume);
    }
}

#[test]
fn test_loaded_rows_resample_in_chronological_order() {
    // File order is not chronological
    let csv = "2024.01.03 10:00,3,3,3,3,1\n2024.01.02 10:00,2,2,2,2,1\n2024.01.04 10:00,4,4,4,4,1\n";
    let bars = read_bars(csv.as_bytes()).unwrap();
    let weeks = resample_weekly(&bars, Weekday::Sun);

    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].open, 2.0);
    assert_eq!(weeks[0].close, 4.0);
}
