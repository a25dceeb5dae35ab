// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Rule configuration.
//!
//! Every threshold used by the evaluators lives here. Humidity and soil
//! moisture thresholds are fractions in `[0, 1]`, matching
//! [`SensorReading`](crate::reading::SensorReading).

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Master configuration for a simulation session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Watering rule thresholds.
    pub watering: WateringConfig,

    /// Shading band edges.
    pub shading: ShadingConfig,

    /// Multi-condition alert thresholds.
    pub alert: AlertConfig,

    /// Consecutive-alert escalation.
    pub escalation: EscalationConfig,

    /// Soil moisture trend tracking.
    pub trend: TrendConfig,

    /// Action log settings.
    pub log: LogConfig,
}

impl RuleConfig {
    /// Check that the configuration describes a consistent rule set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shading.validate()?;
        self.alert.validate()?;
        self.escalation.validate()?;
        self.trend.validate()?;
        Ok(())
    }
}

/// Watering rule thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WateringConfig {
    /// Above this moisture watering is skipped.
    pub skip_above: f64,
    /// Lower bound (inclusive) of the light-watering moisture band.
    pub light_band_min: f64,
    /// Upper bound (inclusive) of the light-watering moisture band.
    pub light_band_max: f64,
    /// Temperature (°C) above which the light band waters.
    pub light_temp_above: f64,
    /// Below this moisture the soil counts as dry.
    pub dry_below: f64,
    /// Dry soil is watered when humidity is below this fraction...
    pub dry_humidity_below: f64,
    /// ...or when temperature (°C) is above this.
    pub dry_temp_above: f64,
}

impl Default for WateringConfig {
    fn default() -> Self {
        Self {
            skip_above: 0.7,
            light_band_min: 0.35,
            light_band_max: 0.5,
            light_temp_above: 35.0,
            dry_below: 0.35,
            dry_humidity_below: 0.4,
            dry_temp_above: 30.0,
        }
    }
}

/// Shading band edges in lux.
///
/// Bands: `< open_below` opens, `[open_below, no_action_max]` holds,
/// `(no_action_max, partial_max]` closes partially, `> partial_max` closes fully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    pub open_below: f64,
    pub no_action_max: f64,
    pub partial_max: f64,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            open_below: 300.0,
            no_action_max: 800.0,
            partial_max: 1000.0,
        }
    }
}

impl ShadingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.open_below <= self.no_action_max && self.no_action_max < self.partial_max {
            Ok(())
        } else {
            Err(ConfigError::UnorderedShadingBands {
                open_below: self.open_below,
                no_action_max: self.no_action_max,
                partial_max: self.partial_max,
            })
        }
    }
}

/// Multi-condition alert thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// High temperature (°C).
    pub temp_above: f64,
    /// Low humidity (fraction).
    pub humidity_below: f64,
    /// High CO2 (ppm).
    pub co2_above: f64,
    /// Low soil moisture (fraction).
    pub moisture_below: f64,
    /// Very high light (lux).
    pub light_above: f64,
    /// Breached conditions needed to raise an alert.
    pub min_conditions: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            temp_above: 36.0,
            humidity_below: 0.25,
            co2_above: 1200.0,
            moisture_below: 0.30,
            light_above: 1100.0,
            min_conditions: 3,
        }
    }
}

impl AlertConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let max = crate::alert::CONDITION_COUNT;
        if (1..=max).contains(&self.min_conditions) {
            Ok(())
        } else {
            Err(ConfigError::InvalidMinConditions {
                actual: self.min_conditions,
                max,
            })
        }
    }
}

/// Consecutive-alert escalation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Consecutive alert intervals that raise the critical flag.
    pub critical_after: u32,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self { critical_after: 2 }
    }
}

impl EscalationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.critical_after == 0 {
            return Err(ConfigError::ZeroEscalation);
        }
        Ok(())
    }
}

/// Soil moisture trend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Moving average window (readings).
    pub window: usize,
    /// Average below this is "decreasing".
    pub decreasing_below: f64,
    /// Average above this is "increasing".
    pub increasing_above: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: 3,
            decreasing_below: 0.35,
            increasing_above: 0.6,
        }
    }
}

/// Largest accepted moving average window.
pub const MAX_TREND_WINDOW: usize = 10_000;

impl TrendConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::ZeroWindow(self.window));
        }
        if self.window > MAX_TREND_WINDOW {
            return Err(ConfigError::WindowTooLarge {
                window: self.window,
                max: MAX_TREND_WINDOW,
            });
        }
        if !self.decreasing_below.is_finite() || !self.increasing_above.is_finite() {
            return Err(ConfigError::NonFiniteTrendThreshold {
                decreasing_below: self.decreasing_below,
                increasing_above: self.increasing_above,
            });
        }
        if self.decreasing_below > self.increasing_above {
            return Err(ConfigError::UnorderedTrendThresholds {
                decreasing_below: self.decreasing_below,
                increasing_above: self.increasing_above,
            });
        }
        Ok(())
    }
}

/// Action log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Entries shown in the session summary.
    pub summary_entries: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { summary_entries: 5 }
    }
}
