// Greenhouse Sim - Command-line simulator
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Greenhouse Sim
//!
//! Runs a sequence of sensor readings through the greenhouse rule engine
//! and prints per-interval decisions followed by a session summary.
//!
//! ## Usage
//!
//! ```bash
//! # Ten random intervals, reproducible
//! greenhouse-sim --source random --seed 42
//!
//! # Replay a CSV dataset with percent humidity and moisture
//! greenhouse-sim --source csv --csv readings.csv --unit percent
//!
//! # Baseline scenario as JSON lines with custom thresholds
//! greenhouse-sim --source baseline --config rules.json --format json
//! ```

mod error;
mod render;
mod source;

use clap::Parser;
use error::SimError;
use greenhouse::SimulationSession;
use render::{write_output, OutputFormat};
use source::{load_config, load_readings, SourceKind, SourceOptions, UnitArg};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Greenhouse decision-support simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reading source
    #[arg(short, long, value_enum, default_value = "random")]
    source: SourceKind,

    /// CSV file for `--source csv`
    #[arg(short, long)]
    csv: Option<PathBuf>,

    /// Humidity and soil moisture unit of the CSV file
    #[arg(short, long, value_enum, default_value = "fraction")]
    unit: UnitArg,

    /// Number of intervals for the random source
    #[arg(short = 'n', long, default_value = "10")]
    intervals: usize,

    /// Random seed (random source and shuffling)
    #[arg(long)]
    seed: Option<u64>,

    /// Shuffle scenario readings
    #[arg(long)]
    shuffle: bool,

    /// JSON rule configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn source_options(&self) -> SourceOptions {
        SourceOptions {
            kind: self.source,
            csv: self.csv.clone(),
            unit: self.unit,
            intervals: self.intervals,
            seed: self.seed,
            shuffle: self.shuffle,
        }
    }
}

fn main() {
    let args = Args::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        };
        EnvFilter::from_default_env().add_directive(level.into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Greenhouse Sim v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    let config = load_config(args.config.as_deref())?;
    let mut session = SimulationSession::new(config)?;

    let readings = load_readings(&args.source_options())?;
    info!("Running {} intervals", readings.len());

    let reports = session.run(readings);
    let summary = session.summary();
    info!(
        "Finished: {} alert intervals, {} critical",
        summary.alert_intervals, summary.critical_intervals
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_output(&mut out, args.format, &reports, &summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["greenhouse-sim"]);
        assert_eq!(args.source, SourceKind::Random);
        assert_eq!(args.intervals, 10);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.shuffle);
    }

    #[test]
    fn test_csv_arguments() {
        let args = Args::parse_from([
            "greenhouse-sim",
            "--source",
            "csv",
            "--csv",
            "data.csv",
            "--unit",
            "percent",
            "--format",
            "json",
        ]);
        let options = args.source_options();
        assert_eq!(options.kind, SourceKind::Csv);
        assert_eq!(options.unit, UnitArg::Percent);
        assert_eq!(options.csv, Some(PathBuf::from("data.csv")));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_config_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, r#"{"trend": {"window": 0}}"#).unwrap();

        let args = Args::parse_from([
            "greenhouse-sim",
            "--source",
            "baseline",
            "--config",
            path.to_str().unwrap(),
        ]);
        assert!(matches!(run(&args), Err(SimError::Rules(_))));
    }
}
