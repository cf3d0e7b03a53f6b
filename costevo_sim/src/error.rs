//! Error types for the simulation harness.

use costevo_core::ModelError;
use thiserror::Error;

/// Errors that can occur while running or exporting an experiment.
#[derive(Debug, Error)]
pub enum SimError {
    /// Model construction failed (bad parameters)
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Export file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Export serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
