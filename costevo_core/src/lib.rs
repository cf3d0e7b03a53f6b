//! Costevo Core - Technology Cost Evolution over a Design Structure Matrix
//!
//! A technology is modelled as `N` components, each with a scalar cost, wired
//! together by a Design Structure Matrix (DSM). Innovation is a stochastic
//! hill-climb:
//! 1. **Pick**: choose a component `i` uniformly at random
//! 2. **Propose**: draw `u^gamma` for every component `i` depends on
//! 3. **Select**: keep the proposal only if it strictly lowers their summed cost
//!
//! All randomness comes from the `rand::Rng` handed to the simulator, so a
//! seeded generator reproduces a run exactly.
//!
//! # Example
//!
//! ```ignore
//! use costevo_core::{CostEvolutionSimulator, ModelParams};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let params = ModelParams { components: 10, ..Default::default() };
//! let mut sim = CostEvolutionSimulator::new(params, ChaCha8Rng::seed_from_u64(42))?;
//! let history = sim.run();
//! ```

pub mod dsm;
pub mod error;
pub mod labels;
pub mod params;
pub mod simulator;

// Re-export key types for convenience
pub use dsm::Dsm;
pub use error::ModelError;
pub use labels::ComponentLabels;
pub use params::ModelParams;
pub use simulator::CostEvolutionSimulator;
