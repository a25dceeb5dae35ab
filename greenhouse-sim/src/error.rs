// Greenhouse Sim - Error types
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

use greenhouse::GreenhouseError;
use greenhouse_testdata::{DatasetError, GeneratorError};
use std::path::PathBuf;
use thiserror::Error;

/// Simulator error types.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Cannot read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("Rule engine error: {0}")]
    Rules(#[from] GreenhouseError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("--source csv requires --csv <path>")]
    MissingCsvPath,

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
