//! Costevo Deterministic Simulation Harness
//!
//! Runs the cost evolution model from `costevo_core` under fully seeded
//! randomness, so any trajectory can be reproduced from its seed alone.
//!
//! - **Seeding**: one master seed per run, expanded into a ChaCha8 stream
//! - **Runner**: sweeps consecutive seeds and summarizes each run
//! - **Export**: JSON records for external line charts and DSM heatmaps
//! - **Report**: plain-text DSM grid and dependency listing
//!
//! # Usage
//!
//! ```ignore
//! use costevo_core::ModelParams;
//! use costevo_sim::ExperimentRunner;
//!
//! let runner = ExperimentRunner::new(ModelParams::default(), 42).with_seeds(5);
//! for result in runner.run_all()? {
//!     println!("seed={} final={:.3}", result.seed, result.final_cost);
//! }
//! ```

mod context;
mod error;
mod exporter;
mod runner;
pub mod report;

pub use context::SeedContext;
pub use error::SimError;
pub use exporter::RunExport;
pub use runner::{ExperimentRunner, RunResult, SeededRun};
