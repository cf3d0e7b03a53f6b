//! Construction parameters for the cost evolution model.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Parameters fixed for the lifetime of a simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Number of components (N)
    pub components: usize,

    /// Difficulty of reducing costs. Proposals are `u^gamma` with `u ~ U[0,1)`,
    /// so a larger gamma concentrates proposals near zero.
    pub gamma: f64,

    /// Innovation attempts performed by one `run`
    pub steps: usize,

    /// Probability that any off-diagonal DSM entry is set
    pub density: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            components: 50,
            gamma: 2.0,
            steps: 1000,
            density: 0.2,
        }
    }
}

impl ModelParams {
    /// Creates parameters from their raw values (unvalidated).
    pub fn new(components: usize, gamma: f64, steps: usize, density: f64) -> Self {
        Self {
            components,
            gamma,
            steps,
            density,
        }
    }

    /// Checks every parameter against its domain.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.components < 1 {
            return Err(ModelError::invalid(
                "components",
                "at least one component is required",
            ));
        }

        validate_density(self.density)?;

        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ModelError::invalid(
                "gamma",
                format!("must be a finite value > 0, got {}", self.gamma),
            ));
        }

        Ok(())
    }
}

/// Checks that a DSM density is a probability.
pub(crate) fn validate_density(density: f64) -> Result<(), ModelError> {
    // NaN fails the range check
    if !(0.0..=1.0).contains(&density) {
        return Err(ModelError::invalid(
            "density",
            format!("must lie in [0, 1], got {}", density),
        ));
    }
    Ok(())
}
