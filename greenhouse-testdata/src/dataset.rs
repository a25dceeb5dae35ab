// Greenhouse Testdata - CSV datasets
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Reading datasets stored as CSV.
//!
//! Header: `temperature,humidity,light_intensity,soil_moisture,co2_level`.
//! Humidity and soil moisture are written in the [`Unit`] passed by the
//! caller; every row is validated into a [`SensorReading`] on import.

use greenhouse::{SensorReading, Unit, ValidationError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

/// Dataset error types.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid reading at line {line}: {source}")]
    InvalidReading {
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Empty dataset")]
    Empty,
}

/// One CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub temperature: f64,
    pub humidity: f64,
    pub light_intensity: f64,
    pub soil_moisture: f64,
    pub co2_level: f64,
}

impl ReadingRecord {
    /// Express a reading in `unit`.
    pub fn from_reading(reading: &SensorReading, unit: Unit) -> Self {
        Self {
            temperature: reading.temperature(),
            humidity: unit.from_fraction(reading.humidity()),
            light_intensity: reading.light_intensity(),
            soil_moisture: unit.from_fraction(reading.soil_moisture()),
            co2_level: reading.co2_level(),
        }
    }

    /// Validate this record, reading humidity and moisture in `unit`.
    pub fn to_reading(self, unit: Unit) -> Result<SensorReading, ValidationError> {
        SensorReading::with_unit(
            unit,
            self.temperature,
            self.humidity,
            self.light_intensity,
            self.soil_moisture,
            self.co2_level,
        )
    }
}

/// Parse readings from any CSV source.
pub fn read_csv_from<R: Read>(source: R, unit: Unit) -> Result<Vec<SensorReading>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);
    let mut readings = Vec::new();

    for (i, result) in reader.deserialize::<ReadingRecord>().enumerate() {
        let record = result?;
        let reading = record
            .to_reading(unit)
            .map_err(|source| DatasetError::InvalidReading {
                // header is line 1
                line: i + 2,
                source,
            })?;
        readings.push(reading);
    }

    if readings.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(readings)
}

/// Import readings from a CSV file.
pub fn read_csv(path: impl AsRef<Path>, unit: Unit) -> Result<Vec<SensorReading>, DatasetError> {
    let file = File::open(path)?;
    read_csv_from(file, unit)
}

/// Write readings to any CSV sink.
pub fn write_csv_to<W: Write>(
    sink: W,
    readings: &[SensorReading],
    unit: Unit,
) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_writer(sink);
    for reading in readings {
        writer.serialize(ReadingRecord::from_reading(reading, unit))?;
    }
    writer.flush()?;
    Ok(())
}

/// Export readings to a CSV file.
pub fn write_csv(
    path: impl AsRef<Path>,
    readings: &[SensorReading],
    unit: Unit,
) -> Result<(), DatasetError> {
    let file = File::create(path)?;
    write_csv_to(file, readings, unit)
}
