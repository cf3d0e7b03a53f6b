//! JSON exporter for external plotting.
//!
//! Captures everything needed to draw the cost trajectory line chart and the
//! DSM heatmap outside of this crate.

use costevo_core::{CostEvolutionSimulator, ModelParams};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Complete record of one seeded run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunExport {
    /// Model parameters
    pub params: ModelParams,

    /// Seed the run was derived from
    pub seed: u64,

    /// Whether the DSM was generated upper-triangular
    #[serde(default)]
    pub acyclic: bool,

    /// Component labels (`A`, `B`, ...)
    pub labels: Vec<String>,

    /// DSM rows; `dsm[i][j]` means component i depends on component j
    pub dsm: Vec<Vec<bool>>,

    /// Outgoing dependency count per component
    pub outgoing_dependencies: Vec<usize>,

    /// Costs at construction
    pub initial_costs: Vec<f64>,

    /// Costs after the run
    pub final_costs: Vec<f64>,

    /// Total cost before the first attempt and after each attempt
    pub cost_history: Vec<f64>,

    /// Number of accepted innovation attempts
    pub accepted_steps: u64,
}

impl RunExport {
    /// Captures a finished run.
    pub fn capture<R: Rng>(
        seed: u64,
        acyclic: bool,
        simulator: &CostEvolutionSimulator<R>,
        initial_costs: &[f64],
        cost_history: &[f64],
    ) -> Self {
        let dsm = simulator.dsm();
        Self {
            params: *simulator.params(),
            seed,
            acyclic,
            labels: simulator.labels().as_slice().to_vec(),
            dsm: dsm.rows(),
            outgoing_dependencies: dsm.outgoing_counts(),
            initial_costs: initial_costs.to_vec(),
            final_costs: simulator.costs().iter().copied().collect(),
            cost_history: cost_history.to_vec(),
            accepted_steps: simulator.accepted(),
        }
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
