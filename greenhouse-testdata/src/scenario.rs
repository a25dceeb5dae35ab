// Greenhouse Testdata - Canned scenarios
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Fixed reading sequences for repeatable runs.

use greenhouse::{SensorReading, ValidationError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Light and CO2 used where a scenario only specifies moisture, temperature
/// and humidity.
const NEUTRAL_LIGHT: f64 = 600.0;
const NEUTRAL_CO2: f64 = 800.0;

/// Mixed conditions: (temperature °C, humidity, CO2 ppm, soil moisture, light lux).
const BASELINE: [[f64; 5]; 10] = [
    [28.0, 0.45, 800.0, 0.45, 400.0],
    [36.0, 0.20, 1300.0, 0.25, 1200.0],
    [38.0, 0.15, 1400.0, 0.20, 1300.0],
    [33.0, 0.60, 600.0, 0.75, 200.0],
    [35.0, 0.30, 1100.0, 0.32, 850.0],
    [31.0, 0.42, 900.0, 0.40, 600.0],
    [37.0, 0.22, 1250.0, 0.28, 1150.0],
    [34.0, 0.35, 1000.0, 0.48, 750.0],
    [38.0, 0.18, 1350.0, 0.22, 1250.0],
    [30.0, 0.50, 850.0, 0.55, 500.0],
];

/// Soil drying out over six intervals: (soil moisture, temperature °C, humidity).
const DRYING: [[f64; 3]; 6] = [
    [0.65, 28.0, 0.50],
    [0.55, 30.0, 0.45],
    [0.45, 32.0, 0.40],
    [0.32, 34.0, 0.35],
    [0.28, 35.0, 0.30],
    [0.25, 36.0, 0.25],
];

/// Named fixed scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Ten mixed intervals including consecutive multi-condition breaches.
    Baseline,
    /// Six intervals of steadily drying soil under rising heat.
    Drying,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Baseline => "baseline",
            Scenario::Drying => "drying",
        }
    }

    /// Readings in their canonical order.
    ///
    /// Empty if a table row fails validation; `test_every_table_row_is_valid`
    /// guards the tables. Use [`try_readings`](Self::try_readings) to see the
    /// error.
    pub fn readings(&self) -> Vec<SensorReading> {
        self.try_readings().unwrap_or_default()
    }

    /// Readings in their canonical order, validating every table row.
    pub fn try_readings(&self) -> Result<Vec<SensorReading>, ValidationError> {
        match self {
            Scenario::Baseline => BASELINE
                .iter()
                .map(|&[temp, hum, co2, moisture, light]| {
                    SensorReading::new(temp, hum, light, moisture, co2)
                })
                .collect(),
            Scenario::Drying => DRYING
                .iter()
                .map(|&[moisture, temp, hum]| {
                    SensorReading::new(temp, hum, NEUTRAL_LIGHT, moisture, NEUTRAL_CO2)
                })
                .collect(),
        }
    }

    /// Readings shuffled with a seeded RNG (or entropy when `seed` is `None`).
    pub fn shuffled(&self, seed: Option<u64>) -> Result<Vec<SensorReading>, ValidationError> {
        let mut readings = self.try_readings()?;
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        readings.shuffle(&mut rng);
        Ok(readings)
    }
}
