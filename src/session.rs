// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Simulation session
//!
//! A [`SimulationSession`] owns every piece of state that survives between
//! intervals: the moisture trend history, the escalation counter and the
//! action log. Each call to [`SimulationSession::step`] processes one
//! reading in a fixed order:
//!
//! 1. update the trend tracker
//! 2. evaluate watering
//! 3. evaluate shading
//! 4. evaluate alerts
//! 5. update the escalator
//! 6. emit an [`IntervalReport`]

use crate::config::RuleConfig;
use crate::decision::{evaluate, Decision};
use crate::error::Result;
use crate::escalation::AlertEscalator;
use crate::reading::SensorReading;
use crate::shading::ShadingAction;
use crate::trend::{advice_for, TrendSnapshot, TrendTracker, WateringSchedule};
use crate::watering::WateringAction;
use serde::{Deserialize, Serialize};

/// Recommendation attached to each report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub schedule: WateringSchedule,
    pub advice: String,
}

impl Recommendation {
    fn from_trend(snapshot: &TrendSnapshot) -> Self {
        Self {
            schedule: snapshot.schedule(),
            advice: snapshot.trend.advice().to_string(),
        }
    }
}

/// Everything produced for one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalReport {
    /// 1-based interval number.
    pub interval: usize,
    pub reading: SensorReading,
    pub decision: Decision,
    pub trend: TrendSnapshot,
    pub recommendation: Recommendation,
}

/// One action log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub interval: usize,
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub watering: WateringAction,
    pub shading: ShadingAction,
    pub alert: bool,
    pub critical: bool,
}

/// End-of-run view of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub intervals: usize,
    pub alert_intervals: usize,
    pub critical_intervals: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    /// Trend advice, or the no-data advice before the first reading.
    pub advice: String,
    /// Most recent log entries, oldest first.
    pub recent: Vec<LogEntry>,
}

/// Stateful driver for a sequence of readings.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    config: RuleConfig,
    tracker: TrendTracker,
    escalator: AlertEscalator,
    log: Vec<LogEntry>,
    alert_intervals: usize,
    critical_intervals: usize,
}

impl SimulationSession {
    /// Create a session after validating the configuration.
    pub fn new(config: RuleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tracker: TrendTracker::new(config.trend.clone()),
            escalator: AlertEscalator::new(config.escalation.clone()),
            config,
            log: Vec::new(),
            alert_intervals: 0,
            critical_intervals: 0,
        })
    }

    /// Process one reading.
    pub fn step(&mut self, reading: SensorReading) -> IntervalReport {
        let interval = self.log.len() + 1;

        let trend = self.tracker.push(reading.soil_moisture());
        let evaluation = evaluate(&reading, &self.config);
        let escalation = self.escalator.update(evaluation.alert.alert);
        let decision = Decision::new(evaluation, escalation);

        if decision.alert_triggered {
            self.alert_intervals += 1;
        }
        if decision.critical_flag {
            self.critical_intervals += 1;
            #[cfg(feature = "logging")]
            log::warn!(
                "critical risk flag at interval {}: {} consecutive alerts",
                interval,
                decision.consecutive_alerts
            );
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "interval {}: watering={:?} shading={:?} alert={} avg={:.3}",
            interval,
            decision.watering_action,
            decision.shading_level,
            decision.alert_triggered,
            trend.moving_average
        );

        self.log.push(LogEntry {
            interval,
            soil_moisture: reading.soil_moisture(),
            temperature: reading.temperature(),
            humidity: reading.humidity(),
            watering: decision.watering_action,
            shading: decision.shading_level,
            alert: decision.alert_triggered,
            critical: decision.critical_flag,
        });

        IntervalReport {
            interval,
            reading,
            decision,
            recommendation: Recommendation::from_trend(&trend),
            trend,
        }
    }

    /// Process a sequence of readings.
    pub fn run<I>(&mut self, readings: I) -> Vec<IntervalReport>
    where
        I: IntoIterator<Item = SensorReading>,
    {
        readings.into_iter().map(|r| self.step(r)).collect()
    }

    /// Summary of everything processed so far.
    pub fn summary(&self) -> SessionSummary {
        let trend = self.tracker.snapshot();
        let keep = self.config.log.summary_entries;
        let start = self.log.len().saturating_sub(keep);

        SessionSummary {
            intervals: self.log.len(),
            alert_intervals: self.alert_intervals,
            critical_intervals: self.critical_intervals,
            recommendation: trend.as_ref().map(Recommendation::from_trend),
            advice: advice_for(trend.map(|t| t.trend)).to_string(),
            trend,
            recent: self.log[start..].to_vec(),
        }
    }

    /// Full action log.
    ///
    /// Holds one entry per processed interval until [`reset`](Self::reset);
    /// summaries only read the last `summary_entries`.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Intervals processed so far.
    pub fn intervals(&self) -> usize {
        self.log.len()
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Reset all state, keeping the configuration.
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.escalator.reset();
        self.log.clear();
        self.alert_intervals = 0;
        self.critical_intervals = 0;
    }
}
