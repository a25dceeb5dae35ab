// Greenhouse Testdata - Reading generators and scenarios
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Greenhouse Testdata
//!
//! Reading sources for the greenhouse rule engine:
//!
//! - **Random generation**: uniform readings inside configurable ranges,
//!   seeded for reproducibility
//! - **Drying generator**: soil moisture declining with Gaussian noise
//! - **Canned scenarios**: the baseline table and the drying sequence
//! - **CSV datasets**: load and save readings in fraction or percent units
//!
//! ## Quick Start
//!
//! ```rust
//! use greenhouse::{RuleConfig, SimulationSession};
//! use greenhouse_testdata::{generate_readings, GeneratorConfig};
//!
//! let config = GeneratorConfig::new().with_intervals(10).with_seed(42);
//! let readings = generate_readings(&config).unwrap();
//!
//! let mut session = SimulationSession::new(RuleConfig::default()).unwrap();
//! let reports = session.run(readings);
//! assert_eq!(reports.len(), 10);
//! ```

pub mod dataset;
pub mod generator;
pub mod scenario;

// Re-exports for convenience
pub use dataset::{read_csv, write_csv, DatasetError, ReadingRecord};
pub use generator::{
    generate_drying, generate_readings, DryingProfile, GeneratorConfig, GeneratorError, SensorRanges,
};
pub use scenario::Scenario;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
