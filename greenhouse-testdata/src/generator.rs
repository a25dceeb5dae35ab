// Greenhouse Testdata - Reading generator
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Random reading generation.
//!
//! Ranges are expressed the way sensors usually report them: humidity and
//! soil moisture in percent. Generated values are converted to fractions
//! when the [`SensorReading`] is built.

use greenhouse::{SensorReading, ValidationError};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generator error types.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid range for {field}: [{min}, {max}] must be finite with min <= max")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Invalid noise standard deviation: {0}")]
    InvalidNoise(f64),

    #[error("Generated reading rejected: {0}")]
    Reading(#[from] ValidationError),
}

/// Inclusive generation ranges for each channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRanges {
    /// °C
    pub temperature: (f64, f64),
    /// %
    pub humidity_pct: (f64, f64),
    /// lux
    pub light_intensity: (f64, f64),
    /// %
    pub soil_moisture_pct: (f64, f64),
    /// ppm
    pub co2_level: (f64, f64),
}

impl Default for SensorRanges {
    fn default() -> Self {
        Self {
            temperature: (20.0, 40.0),
            humidity_pct: (20.0, 90.0),
            light_intensity: (100.0, 1500.0),
            soil_moisture_pct: (10.0, 90.0),
            co2_level: (400.0, 1500.0),
        }
    }
}

impl SensorRanges {
    fn validate(&self) -> Result<(), GeneratorError> {
        let ranges = [
            ("temperature", self.temperature),
            ("humidity", self.humidity_pct),
            ("light_intensity", self.light_intensity),
            ("soil_moisture", self.soil_moisture_pct),
            ("co2_level", self.co2_level),
        ];
        for (field, (min, max)) in ranges {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(GeneratorError::InvalidRange { field, min, max });
            }
        }
        Ok(())
    }
}

/// Soil moisture decline used by [`generate_drying`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DryingProfile {
    /// Moisture at the first interval (%).
    pub start_pct: f64,
    /// Decline per interval (percentage points).
    pub decline_pct: f64,
    /// Standard deviation of the added noise (percentage points).
    pub noise_std_pct: f64,
}

impl Default for DryingProfile {
    fn default() -> Self {
        Self {
            start_pct: 65.0,
            decline_pct: 8.0,
            noise_std_pct: 1.5,
        }
    }
}

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of readings to generate.
    pub num_intervals: usize,
    /// Random seed for reproducibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Channel ranges.
    pub ranges: SensorRanges,
    /// Moisture profile for drying runs.
    pub drying: DryingProfile,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_intervals: 10,
            seed: None,
            ranges: SensorRanges::default(),
            drying: DryingProfile::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of readings.
    pub fn with_intervals(mut self, n: usize) -> Self {
        self.num_intervals = n;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set channel ranges.
    pub fn with_ranges(mut self, ranges: SensorRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Set the drying profile.
    pub fn with_drying(mut self, drying: DryingProfile) -> Self {
        self.drying = drying;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}

fn sample(rng: &mut StdRng, (min, max): (f64, f64)) -> f64 {
    rng.gen_range(min..=max)
}

/// Generate uniformly distributed readings.
pub fn generate_readings(config: &GeneratorConfig) -> Result<Vec<SensorReading>, GeneratorError> {
    config.ranges.validate()?;
    let mut rng = config.rng();
    let ranges = &config.ranges;

    (0..config.num_intervals)
        .map(|_| {
            let temperature = sample(&mut rng, ranges.temperature);
            let humidity = sample(&mut rng, ranges.humidity_pct);
            let light = sample(&mut rng, ranges.light_intensity);
            let moisture = sample(&mut rng, ranges.soil_moisture_pct);
            let co2 = sample(&mut rng, ranges.co2_level);
            SensorReading::from_percent(temperature, humidity, light, moisture, co2)
                .map_err(GeneratorError::from)
        })
        .collect()
}

/// Generate readings whose soil moisture declines steadily.
///
/// Moisture follows `start - i * decline` plus Gaussian noise, clamped to
/// `[0, 100]` percent. Other channels are uniform within their ranges.
pub fn generate_drying(config: &GeneratorConfig) -> Result<Vec<SensorReading>, GeneratorError> {
    config.ranges.validate()?;
    let profile = &config.drying;
    let noise = Normal::new(0.0, profile.noise_std_pct)
        .map_err(|_| GeneratorError::InvalidNoise(profile.noise_std_pct))?;
    let mut rng = config.rng();
    let ranges = &config.ranges;

    (0..config.num_intervals)
        .map(|i| {
            let trend = profile.start_pct - profile.decline_pct * i as f64;
            let moisture = (trend + noise.sample(&mut rng)).clamp(0.0, 100.0);
            let temperature = sample(&mut rng, ranges.temperature);
            let humidity = sample(&mut rng, ranges.humidity_pct);
            let light = sample(&mut rng, ranges.light_intensity);
            let co2 = sample(&mut rng, ranges.co2_level);
            SensorReading::from_percent(temperature, humidity, light, moisture, co2)
                .map_err(GeneratorError::from)
        })
        .collect()
}
