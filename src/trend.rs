// Greenhouse - Rule-based greenhouse decision support
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Soil moisture trend tracking and watering advice.
//!
//! The tracker keeps the last `window` moisture readings and smooths them
//! with a simple moving average. The average drives both the trend label
//! and the watering schedule recommendation.

use crate::config::TrendConfig;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Moisture trend classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Decreasing,
    Stable,
    Increasing,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
            Trend::Increasing => "increasing",
        }
    }

    /// Advice shown alongside the trend.
    pub fn advice(&self) -> &'static str {
        match self {
            Trend::Decreasing => "WARNING: Soil getting dry. Schedule watering soon!",
            Trend::Increasing => "Soil moisture trending up. No immediate watering needed.",
            Trend::Stable => "Soil moisture stable. Continue regular monitoring.",
        }
    }
}

/// Advice before any moisture reading has been seen.
pub const NO_DATA_ADVICE: &str = "Collecting more data";

/// Advice for a trend that may not exist yet.
pub fn advice_for(trend: Option<Trend>) -> &'static str {
    trend.map_or(NO_DATA_ADVICE, |t| t.advice())
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended watering cadence derived from the moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WateringSchedule {
    /// Average below 30%.
    Frequent,
    /// Average below 50%.
    Regular,
    /// Average below 70%.
    Reduced,
    /// Anything wetter.
    Minimal,
}

impl WateringSchedule {
    /// Map a moving average (fraction) to a schedule.
    pub fn from_average(average: f64) -> Self {
        if average < 0.3 {
            WateringSchedule::Frequent
        } else if average < 0.5 {
            WateringSchedule::Regular
        } else if average < 0.7 {
            WateringSchedule::Reduced
        } else {
            WateringSchedule::Minimal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WateringSchedule::Frequent => "Frequent watering needed (Every 6 hours)",
            WateringSchedule::Regular => "Regular watering needed (Every 12 hours)",
            WateringSchedule::Reduced => "Reduced watering needed (Every 24 hours)",
            WateringSchedule::Minimal => {
                "Minimal watering needed (Monitor and water when moisture drops below 50%)"
            }
        }
    }
}

impl fmt::Display for WateringSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend state after an update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSnapshot {
    /// Mean of the held readings.
    pub moving_average: f64,
    /// Classification of the average.
    pub trend: Trend,
    /// Readings currently held.
    pub samples: usize,
    /// Window capacity.
    pub window: usize,
}

impl TrendSnapshot {
    /// Whether the window holds its full complement of readings.
    pub fn is_full(&self) -> bool {
        self.samples >= self.window
    }

    /// Watering cadence for this average.
    pub fn schedule(&self) -> WateringSchedule {
        WateringSchedule::from_average(self.moving_average)
    }
}

/// Bounded moisture history with a moving average.
#[derive(Debug, Clone)]
pub struct TrendTracker {
    config: TrendConfig,
    history: VecDeque<f64>,
}

impl TrendTracker {
    /// Create a tracker; a zero window is treated as one.
    pub fn new(config: TrendConfig) -> Self {
        let capacity = config.window.clamp(1, 64);
        Self {
            config,
            history: VecDeque::with_capacity(capacity),
        }
    }

    fn window(&self) -> usize {
        self.config.window.max(1)
    }

    /// Append a moisture reading (fraction), evicting the oldest past capacity.
    pub fn push(&mut self, soil_moisture: f64) -> TrendSnapshot {
        self.history.push_back(soil_moisture);
        while self.history.len() > self.window() {
            self.history.pop_front();
        }
        // history is non-empty after a push
        self.snapshot_unchecked()
    }

    /// Mean of the held readings, `None` when empty.
    pub fn moving_average(&self) -> Option<f64> {
        if self.history.is_empty() {
            return None;
        }
        Some(self.history.iter().sum::<f64>() / self.history.len() as f64)
    }

    /// Trend of the held readings, `None` when empty.
    pub fn trend(&self) -> Option<Trend> {
        self.moving_average().map(|avg| self.classify(avg))
    }

    /// Current state, `None` when empty.
    pub fn snapshot(&self) -> Option<TrendSnapshot> {
        if self.history.is_empty() {
            None
        } else {
            Some(self.snapshot_unchecked())
        }
    }

    fn snapshot_unchecked(&self) -> TrendSnapshot {
        let moving_average = self.moving_average().unwrap_or(0.0);
        TrendSnapshot {
            moving_average,
            trend: self.classify(moving_average),
            samples: self.history.len(),
            window: self.window(),
        }
    }

    /// Classify a moving average.
    pub fn classify(&self, average: f64) -> Trend {
        if average < self.config.decreasing_below {
            Trend::Decreasing
        } else if average > self.config.increasing_above {
            Trend::Increasing
        } else {
            Trend::Stable
        }
    }

    /// Held readings, oldest first.
    pub fn history(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Clear all data.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for TrendTracker {
    fn default() -> Self {
        Self::new(TrendConfig::default())
    }
}
