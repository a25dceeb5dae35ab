//! Error types for the greenhouse rule engine
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias for greenhouse operations
pub type Result<T> = std::result::Result<T, GreenhouseError>;

/// Main error type for greenhouse operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GreenhouseError {
    /// A sensor reading failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The rule configuration is inconsistent
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while constructing a sensor reading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value is not a valid number (NaN, Inf)
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    /// Value lies outside the physical domain of the channel
    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors raised by rule configuration checks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Trend window must hold at least one reading
    #[error("Trend window must be at least 1, got {0}")]
    ZeroWindow(usize),

    /// Trend window beyond the supported history size
    #[error("Trend window {window} exceeds the maximum of {max}")]
    WindowTooLarge { window: usize, max: usize },

    /// Trend thresholds must be finite numbers
    #[error("Trend thresholds must be finite: decreasing<{decreasing_below}, increasing>{increasing_above}")]
    NonFiniteTrendThreshold {
        decreasing_below: f64,
        increasing_above: f64,
    },

    /// Shading band edges must be strictly increasing
    #[error("Shading bands out of order: open<{open_below}, none<={no_action_max}, partial<={partial_max}")]
    UnorderedShadingBands {
        open_below: f64,
        no_action_max: f64,
        partial_max: f64,
    },

    /// Alert threshold count must be reachable
    #[error("Alert min_conditions must be in 1..={max}, got {actual}")]
    InvalidMinConditions { actual: usize, max: usize },

    /// Escalation needs at least one alert interval
    #[error("Escalation critical_after must be at least 1")]
    ZeroEscalation,

    /// Trend band edges must be ordered
    #[error("Trend thresholds out of order: decreasing<{decreasing_below}, increasing>{increasing_above}")]
    UnorderedTrendThresholds {
        decreasing_below: f64,
        increasing_above: f64,
    },
}
