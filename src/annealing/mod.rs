//! Simulated annealing for single-machine sequencing.
//!
//! Stochastic local search over orderings using a pairwise swap as the
//! only neighbourhood move, Metropolis acceptance and geometric cooling.
//! Randomness is injected, so runs are reproducible under a fixed seed.
//!
//! # Submodules
//!
//! - [`AnnealingConfig`]: temperature, cooling rate, iteration budget
//! - [`ExponentialCooling`]: temperature schedule and acceptance rule
//! - [`AnnealingSolver`] / [`solve_annealing`]: the search itself

mod config;
mod cooling;
mod solver;

pub use config::AnnealingConfig;
pub use cooling::{ExponentialCooling, MIN_TEMPERATURE};
pub use solver::{solve_annealing, AnnealingSolver};
