// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Shading control from light intensity bands.

use crate::config::ShadingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Light band for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightLevel {
    VeryLow,
    Moderate,
    High,
    VeryHigh,
}

impl LightLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightLevel::VeryLow => "Very Low Light",
            LightLevel::Moderate => "Moderate Light",
            LightLevel::High => "High Light",
            LightLevel::VeryHigh => "Very High Light",
        }
    }

    /// Shading response for this band.
    pub fn shading(self) -> ShadingAction {
        match self {
            LightLevel::VeryLow => ShadingAction::Open,
            LightLevel::Moderate => ShadingAction::None,
            LightLevel::High => ShadingAction::Partial,
            LightLevel::VeryHigh => ShadingAction::Full,
        }
    }
}

/// Shade position for an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingAction {
    Open,
    None,
    Partial,
    Full,
}

impl ShadingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadingAction::Open => "Open shades",
            ShadingAction::None => "No action",
            ShadingAction::Partial => "Close partially",
            ShadingAction::Full => "Close fully",
        }
    }
}

impl fmt::Display for ShadingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a light intensity (lux) into its band.
///
/// The bands cover every value: `< open_below`, `[open_below, no_action_max]`,
/// `(no_action_max, partial_max]`, `> partial_max`.
pub fn light_level(light_intensity: f64, config: &ShadingConfig) -> LightLevel {
    if light_intensity < config.open_below {
        LightLevel::VeryLow
    } else if light_intensity <= config.no_action_max {
        LightLevel::Moderate
    } else if light_intensity <= config.partial_max {
        LightLevel::High
    } else {
        LightLevel::VeryHigh
    }
}

/// Shading action for a light intensity (lux).
pub fn evaluate_shading(light_intensity: f64, config: &ShadingConfig) -> ShadingAction {
    light_level(light_intensity, config).shading()
}
