//! # Greenhouse - Rule-based greenhouse decision support
//!
//! Threshold rules that turn greenhouse sensor readings into watering,
//! shading and alerting decisions, one interval at a time.
//!
//! ## Key Features
//!
//! - **Validated readings**: one canonical unit (fractions for humidity and
//!   soil moisture), out-of-domain values rejected on construction
//! - **Pure rule evaluation**: watering, shading and multi-condition alerts
//! - **Escalation**: consecutive alert intervals raise a critical risk flag
//! - **Trend tracking**: moving average of soil moisture with advice
//!
//! ## Quick Start
//!
//! ```rust
//! use greenhouse::{RuleConfig, SensorReading, SimulationSession};
//!
//! let mut session = SimulationSession::new(RuleConfig::default()).unwrap();
//!
//! // temperature °C, humidity, light lux, soil moisture, CO2 ppm
//! let reading = SensorReading::new(38.0, 0.15, 1350.0, 0.22, 1400.0).unwrap();
//! let report = session.step(reading);
//!
//! assert!(report.decision.alert_triggered);
//! assert!(!report.decision.critical_flag);
//!
//! // A second high-risk interval escalates
//! let report = session.step(reading);
//! assert!(report.decision.critical_flag);
//! ```
//!
//! ## Modules
//!
//! - [`reading`]: Sensor readings, units and validation
//! - [`watering`]: Watering rules
//! - [`shading`]: Light bands and shading
//! - [`alert`]: Multi-condition alerts
//! - [`escalation`]: Consecutive-alert escalation
//! - [`trend`]: Moisture moving average and watering advice
//! - [`decision`]: Combined per-interval decisions
//! - [`session`]: Simulation driver and action log
//! - [`config`]: Rule thresholds

// Modules
pub mod alert;
pub mod config;
pub mod decision;
pub mod error;
pub mod escalation;
pub mod reading;
pub mod session;
pub mod shading;
pub mod trend;
pub mod watering;

// Re-exports for convenient access
pub use alert::{evaluate_alerts, AlertCondition, AlertEvaluation};
pub use config::{
    AlertConfig, EscalationConfig, LogConfig, RuleConfig, ShadingConfig, TrendConfig,
    WateringConfig, MAX_TREND_WINDOW,
};
pub use decision::{evaluate, Decision, Evaluation};
pub use error::{ConfigError, GreenhouseError, Result, ValidationError};
pub use escalation::{AlertEscalator, Escalation};
pub use reading::{SensorReading, Unit};
pub use session::{IntervalReport, LogEntry, Recommendation, SessionSummary, SimulationSession};
pub use shading::{evaluate_shading, light_level, LightLevel, ShadingAction};
pub use trend::{advice_for, Trend, TrendSnapshot, TrendTracker, WateringSchedule, NO_DATA_ADVICE};
pub use watering::{evaluate_watering, WateringAction, WateringDecision, WateringRule};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
