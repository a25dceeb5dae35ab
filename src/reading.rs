// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Sensor readings
//!
//! A [`SensorReading`] is one validated snapshot of the greenhouse for a
//! single interval. Humidity and soil moisture are stored as fractions in
//! `[0, 1]`; use [`SensorReading::from_percent`] or [`Unit`] when the source
//! reports percentages.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical domain of each channel (inclusive).
pub const TEMPERATURE_RANGE: (f64, f64) = (-50.0, 80.0);
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 1.0);
pub const LIGHT_RANGE: (f64, f64) = (0.0, 200_000.0);
pub const SOIL_MOISTURE_RANGE: (f64, f64) = (0.0, 1.0);
pub const CO2_RANGE: (f64, f64) = (0.0, 10_000.0);

/// Unit used by a source for humidity and soil moisture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Values in `[0, 1]`.
    #[default]
    Fraction,
    /// Values in `[0, 100]`.
    Percent,
}

impl Unit {
    /// Convert a value in this unit to a fraction.
    pub fn to_fraction(self, value: f64) -> f64 {
        match self {
            Unit::Fraction => value,
            Unit::Percent => value / 100.0,
        }
    }

    /// Convert a fraction to this unit.
    pub fn from_fraction(self, value: f64) -> f64 {
        match self {
            Unit::Fraction => value,
            Unit::Percent => value * 100.0,
        }
    }
}

/// One validated sensor snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    temperature: f64,
    humidity: f64,
    light_intensity: f64,
    soil_moisture: f64,
    co2_level: f64,
}

impl SensorReading {
    /// Build a reading with humidity and soil moisture as fractions.
    pub fn new(
        temperature: f64,
        humidity: f64,
        light_intensity: f64,
        soil_moisture: f64,
        co2_level: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            temperature: check("temperature", temperature, TEMPERATURE_RANGE)?,
            humidity: check("humidity", humidity, HUMIDITY_RANGE)?,
            light_intensity: check("light_intensity", light_intensity, LIGHT_RANGE)?,
            soil_moisture: check("soil_moisture", soil_moisture, SOIL_MOISTURE_RANGE)?,
            co2_level: check("co2_level", co2_level, CO2_RANGE)?,
        })
    }

    /// Build a reading with humidity and soil moisture given in percent.
    pub fn from_percent(
        temperature: f64,
        humidity_pct: f64,
        light_intensity: f64,
        soil_moisture_pct: f64,
        co2_level: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_unit(
            Unit::Percent,
            temperature,
            humidity_pct,
            light_intensity,
            soil_moisture_pct,
            co2_level,
        )
    }

    /// Build a reading, converting humidity and soil moisture from `unit`.
    pub fn with_unit(
        unit: Unit,
        temperature: f64,
        humidity: f64,
        light_intensity: f64,
        soil_moisture: f64,
        co2_level: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            temperature,
            unit.to_fraction(humidity),
            light_intensity,
            unit.to_fraction(soil_moisture),
            co2_level,
        )
    }

    /// Air temperature in °C.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity as a fraction.
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Light intensity in lux.
    pub fn light_intensity(&self) -> f64 {
        self.light_intensity
    }

    /// Soil moisture as a fraction.
    pub fn soil_moisture(&self) -> f64 {
        self.soil_moisture
    }

    /// CO2 concentration in ppm.
    pub fn co2_level(&self) -> f64 {
        self.co2_level
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temp: {:.1}°C, Humidity: {:.1}%, Light: {:.1} lux, Soil Moisture: {:.1}%, CO2: {:.1} ppm",
            self.temperature,
            self.humidity * 100.0,
            self.light_intensity,
            self.soil_moisture * 100.0,
            self.co2_level
        )
    }
}

/// Raw, unvalidated form used for deserialization.
#[derive(Deserialize)]
struct RawReading {
    temperature: f64,
    humidity: f64,
    light_intensity: f64,
    soil_moisture: f64,
    co2_level: f64,
}

impl<'de> Deserialize<'de> for SensorReading {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawReading::deserialize(deserializer)?;
        SensorReading::new(
            raw.temperature,
            raw.humidity,
            raw.light_intensity,
            raw.soil_moisture,
            raw.co2_level,
        )
        .map_err(serde::de::Error::custom)
    }
}

fn check(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reading() {
        let r = SensorReading::new(28.0, 0.45, 800.0, 0.45, 400.0).unwrap();
        assert_eq!(r.temperature(), 28.0);
        assert_eq!(r.humidity(), 0.45);
        assert_eq!(r.light_intensity(), 800.0);
        assert_eq!(r.soil_moisture(), 0.45);
        assert_eq!(r.co2_level(), 400.0);
    }

    #[test]
    fn test_percent_matches_fraction() {
        let pct = SensorReading::from_percent(30.0, 50.0, 600.0, 25.0, 900.0).unwrap();
        let frac = SensorReading::new(30.0, 0.5, 600.0, 0.25, 900.0).unwrap();
        assert_eq!(pct, frac);
    }

    #[test]
    fn test_nan_rejected() {
        let err = SensorReading::new(f64::NAN, 0.5, 600.0, 0.5, 800.0).unwrap_err();
        assert_eq!(err, ValidationError::NotFinite { field: "temperature" });

        let err = SensorReading::new(25.0, 0.5, f64::INFINITY, 0.5, 800.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotFinite {
                field: "light_intensity"
            }
        );
    }

    #[test]
    fn test_percent_passed_as_fraction_rejected() {
        // 45 is a percentage, not a fraction
        let err = SensorReading::new(28.0, 45.0, 800.0, 0.45, 400.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "humidity",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(SensorReading::new(25.0, 0.5, -1.0, 0.5, 800.0).is_err());
        assert!(SensorReading::new(25.0, 0.5, 600.0, 0.5, -5.0).is_err());
        assert!(SensorReading::new(25.0, 0.5, 600.0, -0.1, 800.0).is_err());
    }

    #[test]
    fn test_domain_edges_accepted() {
        assert!(SensorReading::new(-50.0, 0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(SensorReading::new(80.0, 1.0, 200_000.0, 1.0, 10_000.0).is_ok());
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(Unit::Percent.to_fraction(45.0), 0.45);
        assert_eq!(Unit::Percent.from_fraction(0.5), 50.0);
        assert_eq!(Unit::Fraction.to_fraction(0.3), 0.3);
    }

    #[test]
    fn test_display_uses_percent() {
        let r = SensorReading::new(28.0, 0.45, 800.0, 0.5, 400.0).unwrap();
        let text = r.to_string();
        assert!(text.contains("Humidity: 45.0%"));
        assert!(text.contains("Soil Moisture: 50.0%"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"{"temperature":28.0,"humidity":0.45,"light_intensity":800.0,"soil_moisture":0.45,"co2_level":400.0}"#;
        assert!(serde_json::from_str::<SensorReading>(ok).is_ok());

        let bad = r#"{"temperature":28.0,"humidity":45.0,"light_intensity":800.0,"soil_moisture":0.45,"co2_level":400.0}"#;
        assert!(serde_json::from_str::<SensorReading>(bad).is_err());
    }
}
