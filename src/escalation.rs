// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Consecutive-alert escalation.

use crate::config::EscalationConfig;
use serde::{Deserialize, Serialize};

/// Escalation result for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    /// Consecutive alert intervals including this one.
    pub consecutive_alerts: u32,
    /// Whether the critical risk flag is raised.
    pub critical: bool,
}

/// Tracks consecutive alert intervals and raises the critical risk flag.
///
/// The counter grows by one per alert interval and drops to zero on the
/// first interval without an alert.
#[derive(Debug, Clone)]
pub struct AlertEscalator {
    config: EscalationConfig,
    consecutive_alerts: u32,
}

impl AlertEscalator {
    pub fn new(config: EscalationConfig) -> Self {
        Self {
            config,
            consecutive_alerts: 0,
        }
    }

    /// Record the alert status of the current interval.
    pub fn update(&mut self, alert: bool) -> Escalation {
        if alert {
            self.consecutive_alerts = self.consecutive_alerts.saturating_add(1);
        } else {
            self.consecutive_alerts = 0;
        }

        Escalation {
            consecutive_alerts: self.consecutive_alerts,
            critical: alert && self.consecutive_alerts >= self.config.critical_after,
        }
    }

    /// Current consecutive alert count.
    pub fn consecutive_alerts(&self) -> u32 {
        self.consecutive_alerts
    }

    /// Whether the last update left the flag raised.
    pub fn is_critical(&self) -> bool {
        self.consecutive_alerts >= self.config.critical_after
    }

    /// Reset all state.
    pub fn reset(&mut self) {
        self.consecutive_alerts = 0;
    }
}

impl Default for AlertEscalator {
    fn default() -> Self {
        Self::new(EscalationConfig::default())
    }
}
