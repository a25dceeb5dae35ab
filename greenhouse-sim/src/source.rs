// Greenhouse Sim - Reading sources
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Reading source selection.

use crate::error::SimError;
use clap::ValueEnum;
use greenhouse::{GreenhouseError, RuleConfig, SensorReading, Unit};
use greenhouse_testdata::{generate_readings, read_csv, GeneratorConfig, Scenario};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where readings come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Uniform random readings.
    Random,
    /// Fixed ten-interval table.
    Baseline,
    /// Fixed drying sequence.
    Drying,
    /// Readings loaded from a CSV file.
    Csv,
}

/// Humidity and soil moisture unit of a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Fraction,
    Percent,
}

impl From<UnitArg> for Unit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Fraction => Unit::Fraction,
            UnitArg::Percent => Unit::Percent,
        }
    }
}

/// Resolved source options.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    pub kind: SourceKind,
    pub csv: Option<PathBuf>,
    pub unit: UnitArg,
    pub intervals: usize,
    pub seed: Option<u64>,
    pub shuffle: bool,
}

/// Produce the readings for a run.
pub fn load_readings(options: &SourceOptions) -> Result<Vec<SensorReading>, SimError> {
    let readings = match options.kind {
        SourceKind::Random => {
            let mut config = GeneratorConfig::new().with_intervals(options.intervals);
            if let Some(seed) = options.seed {
                config = config.with_seed(seed);
            }
            generate_readings(&config)?
        }
        SourceKind::Baseline => scenario_readings(Scenario::Baseline, options)?,
        SourceKind::Drying => scenario_readings(Scenario::Drying, options)?,
        SourceKind::Csv => {
            let path = options.csv.as_ref().ok_or(SimError::MissingCsvPath)?;
            let readings = read_csv(path, options.unit.into())?;
            info!("Dataset loaded: {} readings from {}", readings.len(), path.display());
            readings
        }
    };
    debug!("{:?} source produced {} readings", options.kind, readings.len());
    Ok(readings)
}

fn scenario_readings(
    scenario: Scenario,
    options: &SourceOptions,
) -> Result<Vec<SensorReading>, SimError> {
    let readings = if options.shuffle {
        scenario.shuffled(options.seed)
    } else {
        scenario.try_readings()
    };
    readings.map_err(|e| SimError::Rules(GreenhouseError::from(e)))
}

/// Load a rule configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<RuleConfig, SimError> {
    let Some(path) = path else {
        return Ok(RuleConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config: RuleConfig = serde_json::from_str(&text)?;
    info!("Rule config loaded from {}", path.display());
    Ok(config)
}
