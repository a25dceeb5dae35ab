// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Per-interval decisions.
//!
//! [`evaluate`] runs the stateless rules (watering, shading, alerts) and is
//! a pure function of the reading and configuration. A [`Decision`] adds the
//! escalation state on top.

use crate::alert::{evaluate_alerts, AlertEvaluation};
use crate::config::RuleConfig;
use crate::escalation::Escalation;
use crate::reading::SensorReading;
use crate::shading::{light_level, LightLevel, ShadingAction};
use crate::watering::{self, WateringAction, WateringDecision, WateringRule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stateless rule results for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub watering: WateringDecision,
    pub light_level: LightLevel,
    pub shading: ShadingAction,
    pub alert: AlertEvaluation,
}

/// Run the watering, shading and alert rules for a reading.
pub fn evaluate(reading: &SensorReading, config: &RuleConfig) -> Evaluation {
    let watering = watering::evaluate(reading, &config.watering);
    let light_level = light_level(reading.light_intensity(), &config.shading);
    let alert = evaluate_alerts(reading, &config.alert);

    Evaluation {
        watering,
        light_level,
        shading: light_level.shading(),
        alert,
    }
}

/// Full decision for one interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub watering_action: WateringAction,
    pub watering_rule: WateringRule,
    pub shading_level: ShadingAction,
    pub light_level: LightLevel,
    pub alert_triggered: bool,
    pub critical_flag: bool,
    pub consecutive_alerts: u32,
    pub triggered_conditions: Vec<String>,
}

impl Decision {
    /// Combine rule results with the escalation state.
    pub fn new(evaluation: Evaluation, escalation: Escalation) -> Self {
        Self {
            watering_action: evaluation.watering.action,
            watering_rule: evaluation.watering.rule,
            shading_level: evaluation.shading,
            light_level: evaluation.light_level,
            alert_triggered: evaluation.alert.alert,
            critical_flag: escalation.critical,
            consecutive_alerts: escalation.consecutive_alerts,
            triggered_conditions: evaluation.alert.triggered_conditions,
        }
    }

    /// Alert status line, e.g. `ALERT! (High Temp (>36°C), ...)`.
    pub fn status_line(&self) -> String {
        let mut line = String::from(if self.alert_triggered {
            "ALERT!"
        } else {
            "No Alert"
        });
        if !self.triggered_conditions.is_empty() {
            line.push_str(&format!(" ({})", self.triggered_conditions.join(", ")));
        }
        if self.critical_flag {
            line.push_str(" CRITICAL RISK FLAG!");
        }
        line
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  - Watering: {}", self.watering_action)?;
        writeln!(
            f,
            "  - Shading: {} ({})",
            self.shading_level,
            self.light_level.as_str()
        )?;
        write!(f, "  - Status: {}", self.status_line())
    }
}
