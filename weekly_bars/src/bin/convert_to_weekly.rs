use anyhow::{Context, Result};
use chrono::Weekday;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use weekly_bars::config::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_PREVIEW_ROWS};
use weekly_bars::writer::format_preview;
use weekly_bars::{convert, ResampleConfig};

/// Convert 5-minute MT4 bars into weekly bars with EMA12/EMA26 columns
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Headerless 5-minute CSV (DateTime,Open,High,Low,Close,Volume)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Weekly CSV to write; an existing file is replaced
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Weekday every weekly bucket ends on
    #[arg(long, default_value = "sun", value_parser = parse_week_end)]
    week_end: Weekday,

    /// Number of trailing weeks to print after saving
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview: usize,
}

fn parse_week_end(value: &str) -> std::result::Result<Weekday, String> {
    value
        .parse::<Weekday>()
        .map_err(|_| format!("'{}' is not a weekday (mon, tue, ..., sun)", value))
}

fn run(cli: Cli) -> Result<()> {
    let config = ResampleConfig::new(cli.input, cli.output)
        .with_week_end(cli.week_end)
        .with_preview_rows(cli.preview);
    info!(?config, "starting weekly conversion");

    let table = convert(&config).with_context(|| {
        format!(
            "converting {} to {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    print!("{}", format_preview(&table, config.preview_rows));
    Ok(())
}

/// Print the full error chain; independent of the log filter
fn report_failure<W: Write>(out: &mut W, err: &anyhow::Error) {
    let _ = writeln!(out, "Error: {:#}", err);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            report_failure(&mut std::io::stderr().lock(), &err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cli(input: PathBuf, output: PathBuf) -> Cli {
        Cli {
            input,
            output,
            week_end: Weekday::Sun,
            preview: DEFAULT_PREVIEW_ROWS,
        }
    }

    #[test]
    fn test_missing_input_is_reported_with_its_cause() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.csv");
        let err = run(cli(input, dir.path().join("weekly.csv"))).unwrap_err();

        let mut out = Vec::new();
        report_failure(&mut out, &err);
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Error: converting "));
        assert!(text.contains("absent.csv"));
        assert!(text.ends_with('\n'));

        // Each link of the chain appears once
        let cause = err.root_cause().to_string();
        assert_eq!(text.matches(cause.as_str()).count(), 1);
        assert!(!dir.path().join("weekly.csv").exists());
    }

    #[test]
    fn test_empty_input_is_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bars.csv");
        std::fs::write(&input, "").unwrap();
        let err = run(cli(input, dir.path().join("weekly.csv"))).unwrap_err();

        let mut out = Vec::new();
        report_failure(&mut out, &err);
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("No weekly bars produced"));
    }

    #[test]
    fn test_week_end_parser() {
        assert_eq!(parse_week_end("fri"), Ok(Weekday::Fri));
        assert!(parse_week_end("someday").is_err());
    }
}
