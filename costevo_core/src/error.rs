//! Error types for the cost evolution model.

use thiserror::Error;

/// Errors raised while building a model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A construction parameter is outside its domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

impl ModelError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}
