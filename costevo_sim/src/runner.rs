//! Experiment runner - executes seeded cost evolution runs.

use crate::context::SeedContext;
use crate::error::SimError;
use crate::exporter::RunExport;

use costevo_core::{CostEvolutionSimulator, Dsm, ModelParams};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Summary of one seeded run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Seed used
    pub seed: u64,

    /// Total cost at construction
    pub initial_cost: f64,

    /// Total cost after the last attempt
    pub final_cost: f64,

    /// Innovation attempts performed
    pub attempts: u64,

    /// Attempts that lowered the cost
    pub accepted: u64,

    /// Dependencies in the generated DSM
    pub dependency_count: usize,
}

impl RunResult {
    /// Fraction of attempts that were accepted (0 when nothing ran).
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }

    /// Relative cost reduction over the run, in [0, 1].
    pub fn reduction(&self) -> f64 {
        if self.initial_cost > 0.0 {
            1.0 - self.final_cost / self.initial_cost
        } else {
            0.0
        }
    }
}

/// A finished run with the simulator kept for inspection.
pub struct SeededRun {
    pub seed: u64,
    pub acyclic: bool,
    pub initial_costs: Vec<f64>,
    pub history: Vec<f64>,
    pub simulator: CostEvolutionSimulator<ChaCha8Rng>,
}

impl SeededRun {
    /// Summarizes the run.
    pub fn result(&self) -> RunResult {
        RunResult {
            seed: self.seed,
            initial_cost: self.history.first().copied().unwrap_or_default(),
            final_cost: self.simulator.total_cost(),
            attempts: self.simulator.attempts(),
            accepted: self.simulator.accepted(),
            dependency_count: self.simulator.dsm().edge_count(),
        }
    }

    /// Captures the run for JSON export.
    pub fn export(&self) -> RunExport {
        RunExport::capture(
            self.seed,
            self.acyclic,
            &self.simulator,
            &self.initial_costs,
            &self.history,
        )
    }
}

/// Runs the model over one or more consecutive seeds.
pub struct ExperimentRunner {
    /// Model parameters shared by every run
    params: ModelParams,

    /// First seed
    base_seed: u64,

    /// Number of consecutive seeds to run
    seeds: usize,

    /// Generate upper-triangular (acyclic) DSMs
    acyclic: bool,
}

impl ExperimentRunner {
    /// Creates a new runner for a single seed.
    pub fn new(params: ModelParams, base_seed: u64) -> Self {
        Self {
            params,
            base_seed,
            seeds: 1,
            acyclic: false,
        }
    }

    /// Sets the number of consecutive seeds.
    pub fn with_seeds(mut self, seeds: usize) -> Self {
        self.seeds = seeds;
        self
    }

    /// Switches to upper-triangular DSM generation.
    pub fn with_acyclic(mut self, acyclic: bool) -> Self {
        self.acyclic = acyclic;
        self
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Seeds this runner will use, in order.
    pub fn seed_list(&self) -> Vec<u64> {
        (0..self.seeds as u64)
            .map(|offset| self.base_seed.wrapping_add(offset))
            .collect()
    }

    /// Builds and runs the model for one seed.
    pub fn run_seed(&self, seed: u64) -> Result<SeededRun, SimError> {
        self.params.validate()?;

        let mut rng = SeedContext::new(seed).model_rng(0);
        let mut simulator = if self.acyclic {
            let dsm = Dsm::random_acyclic(self.params.components, self.params.density, &mut rng)?;
            CostEvolutionSimulator::with_dsm(self.params, dsm, rng)?
        } else {
            CostEvolutionSimulator::new(self.params, rng)?
        };

        let dsm = simulator.dsm();
        debug!(
            "seed={} | components={} | dependencies={} | realized density={:.3}",
            seed,
            dsm.size(),
            dsm.edge_count(),
            dsm.density()
        );
        if dsm.edge_count() == 0 && self.params.steps > 0 {
            warn!("seed={} produced no dependencies; every attempt will be rejected", seed);
        }

        let initial_costs: Vec<f64> = simulator.costs().iter().copied().collect();
        let history = simulator.run();

        Ok(SeededRun {
            seed,
            acyclic: self.acyclic,
            initial_costs,
            history,
            simulator,
        })
    }

    /// Runs every seed and returns the summaries.
    pub fn run_all(&self) -> Result<Vec<RunResult>, SimError> {
        info!(
            "Running {} seed(s) from {} | N={} gamma={} steps={} density={}",
            self.seeds,
            self.base_seed,
            self.params.components,
            self.params.gamma,
            self.params.steps,
            self.params.density
        );

        self.seed_list()
            .into_iter()
            .map(|seed| self.run_seed(seed).map(|run| run.result()))
            .collect()
    }
}
