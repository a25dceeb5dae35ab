// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Multi-condition alerting
//!
//! Five named threshold predicates are checked against every reading. An
//! alert is raised when at least [`AlertConfig::min_conditions`] of them are
//! breached.

use crate::config::AlertConfig;
use crate::reading::SensorReading;
use serde::{Deserialize, Serialize};

/// Number of alert conditions in [`CONDITIONS`].
pub const CONDITION_COUNT: usize = 5;

type Predicate = fn(&SensorReading, &AlertConfig) -> bool;

/// A single alert condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCondition {
    HighTemperature,
    LowHumidity,
    HighCo2,
    LowSoilMoisture,
    VeryHighLight,
}

/// Conditions in evaluation (and reporting) order.
pub const CONDITIONS: [(AlertCondition, Predicate); CONDITION_COUNT] = [
    (AlertCondition::HighTemperature, high_temperature),
    (AlertCondition::LowHumidity, low_humidity),
    (AlertCondition::HighCo2, high_co2),
    (AlertCondition::LowSoilMoisture, low_soil_moisture),
    (AlertCondition::VeryHighLight, very_high_light),
];

fn high_temperature(reading: &SensorReading, config: &AlertConfig) -> bool {
    reading.temperature() > config.temp_above
}

fn low_humidity(reading: &SensorReading, config: &AlertConfig) -> bool {
    reading.humidity() < config.humidity_below
}

fn high_co2(reading: &SensorReading, config: &AlertConfig) -> bool {
    reading.co2_level() > config.co2_above
}

fn low_soil_moisture(reading: &SensorReading, config: &AlertConfig) -> bool {
    reading.soil_moisture() < config.moisture_below
}

fn very_high_light(reading: &SensorReading, config: &AlertConfig) -> bool {
    reading.light_intensity() > config.light_above
}

impl AlertCondition {
    /// Check this condition against a reading.
    pub fn is_breached(self, reading: &SensorReading, config: &AlertConfig) -> bool {
        CONDITIONS
            .iter()
            .find(|(condition, _)| *condition == self)
            .map(|(_, predicate)| predicate(reading, config))
            .unwrap_or(false)
    }

    /// Human-readable label including the configured threshold.
    pub fn label(self, config: &AlertConfig) -> String {
        match self {
            AlertCondition::HighTemperature => format!("High Temp (>{}°C)", config.temp_above),
            AlertCondition::LowHumidity => {
                format!("Low Humidity (<{:.0}%)", config.humidity_below * 100.0)
            }
            AlertCondition::HighCo2 => format!("High CO2 (>{} ppm)", config.co2_above),
            AlertCondition::LowSoilMoisture => {
                format!("Low Soil Moisture (<{:.0}%)", config.moisture_below * 100.0)
            }
            AlertCondition::VeryHighLight => {
                format!("Very High Light (>{} lux)", config.light_above)
            }
        }
    }
}

/// Outcome of the alert check for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvaluation {
    /// Whether enough conditions were breached.
    pub alert: bool,
    /// Breached conditions, in table order.
    pub conditions: Vec<AlertCondition>,
    /// Labels of the breached conditions, same order.
    pub triggered_conditions: Vec<String>,
}

impl AlertEvaluation {
    /// Number of breached conditions.
    pub fn breached_count(&self) -> usize {
        self.conditions.len()
    }
}

/// Check all alert conditions against a reading.
pub fn evaluate_alerts(reading: &SensorReading, config: &AlertConfig) -> AlertEvaluation {
    let conditions: Vec<AlertCondition> = CONDITIONS
        .iter()
        .filter(|(_, predicate)| predicate(reading, config))
        .map(|(condition, _)| *condition)
        .collect();

    let triggered_conditions = conditions.iter().map(|c| c.label(config)).collect();

    AlertEvaluation {
        alert: conditions.len() >= config.min_conditions,
        conditions,
        triggered_conditions,
    }
}
