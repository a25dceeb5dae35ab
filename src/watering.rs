// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Watering rules
//!
//! Rules are checked in order and the first match wins:
//!
//! 1. soil too wet → skip
//! 2. moderately dry soil under heat stress → light watering
//! 3. dry soil with dry air or heat → full watering
//!
//! Anything else is reported as [`WateringRule::Unclassified`] with
//! [`WateringAction::None`].

use crate::config::WateringConfig;
use crate::reading::SensorReading;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Watering action for an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WateringAction {
    Skip,
    Light,
    Full,
    None,
}

impl WateringAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WateringAction::Skip => "Skip watering (soil too wet)",
            WateringAction::Light => "Initiate light watering",
            WateringAction::Full => "Initiate watering",
            WateringAction::None => "No action",
        }
    }
}

impl fmt::Display for WateringAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule that produced a watering action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WateringRule {
    /// Moisture above the skip threshold.
    SoilSaturated,
    /// Moisture in the light band and temperature high.
    HeatStress,
    /// Moisture below the dry threshold with low humidity or high temperature.
    DrySoil,
    /// No rule matched.
    Unclassified,
}

/// Result of the watering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringDecision {
    pub action: WateringAction,
    pub rule: WateringRule,
}

impl WateringDecision {
    fn new(action: WateringAction, rule: WateringRule) -> Self {
        Self { action, rule }
    }

    /// True when no rule matched.
    pub fn is_unclassified(&self) -> bool {
        self.rule == WateringRule::Unclassified
    }
}

/// Evaluate the watering rules for raw channel values.
///
/// `soil_moisture` and `humidity` are fractions.
pub fn evaluate_watering(
    soil_moisture: f64,
    temperature: f64,
    humidity: f64,
    config: &WateringConfig,
) -> WateringDecision {
    if soil_moisture > config.skip_above {
        return WateringDecision::new(WateringAction::Skip, WateringRule::SoilSaturated);
    }

    let in_light_band =
        soil_moisture >= config.light_band_min && soil_moisture <= config.light_band_max;
    if in_light_band && temperature > config.light_temp_above {
        return WateringDecision::new(WateringAction::Light, WateringRule::HeatStress);
    }

    if soil_moisture < config.dry_below
        && (humidity < config.dry_humidity_below || temperature > config.dry_temp_above)
    {
        return WateringDecision::new(WateringAction::Full, WateringRule::DrySoil);
    }

    WateringDecision::new(WateringAction::None, WateringRule::Unclassified)
}

/// Evaluate the watering rules for a reading.
pub fn evaluate(reading: &SensorReading, config: &WateringConfig) -> WateringDecision {
    evaluate_watering(
        reading.soil_moisture(),
        reading.temperature(),
        reading.humidity(),
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(moisture: f64, temp: f64, hum: f64) -> WateringDecision {
        evaluate_watering(moisture, temp, hum, &WateringConfig::default())
    }

    #[test]
    fn test_wet_soil_always_skips() {
        for moisture in [0.71, 0.8, 0.95, 1.0] {
            for temp in [-10.0, 20.0, 36.0, 45.0] {
                for hum in [0.0, 0.3, 0.9] {
                    assert_eq!(eval(moisture, temp, hum).action, WateringAction::Skip);
                }
            }
        }
    }

    #[test]
    fn test_skip_threshold_is_exclusive() {
        assert_ne!(eval(0.7, 20.0, 0.5).action, WateringAction::Skip);
    }

    #[test]
    fn test_light_watering_band() {
        assert_eq!(eval(0.35, 36.0, 0.5).action, WateringAction::Light);
        assert_eq!(eval(0.5, 36.0, 0.5).action, WateringAction::Light);
        assert_eq!(eval(0.4, 35.0, 0.5).action, WateringAction::None);
        assert_eq!(eval(0.51, 40.0, 0.5).action, WateringAction::None);
    }

    #[test]
    fn test_dry_soil_watering() {
        let d = eval(0.3, 25.0, 0.3);
        assert_eq!(d.action, WateringAction::Full);
        assert_eq!(d.rule, WateringRule::DrySoil);

        assert_eq!(eval(0.3, 31.0, 0.6).action, WateringAction::Full);
        assert_eq!(eval(0.3, 30.0, 0.4).action, WateringAction::None);
    }

    #[test]
    fn test_heat_alone_does_not_water_moist_soil() {
        // temperature > 30 only counts when the soil is dry
        let d = eval(0.6, 40.0, 0.1);
        assert_eq!(d.action, WateringAction::None);
        assert!(d.is_unclassified());
    }

    #[test]
    fn test_descending_moisture_sweep() {
        assert_eq!(eval(0.3, 60.0, 0.0).action, WateringAction::Full);
        assert_eq!(eval(0.4, 50.0, 0.0).action, WateringAction::Light);
        assert_eq!(eval(0.5, 40.0, 0.0).action, WateringAction::Light);
        assert_eq!(eval(0.6, 30.0, 0.0).action, WateringAction::None);
        assert_eq!(eval(0.8, 20.0, 0.0).action, WateringAction::Skip);
    }

    #[test]
    fn test_reading_entry_point() {
        let reading = SensorReading::new(37.0, 0.5, 600.0, 0.45, 800.0).unwrap();
        let d = evaluate(&reading, &WateringConfig::default());
        assert_eq!(d.action, WateringAction::Light);
        assert_eq!(d.rule, WateringRule::HeatStress);
    }
}
