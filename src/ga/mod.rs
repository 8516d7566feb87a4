//! GA-based sequencing.
//!
//! A generational genetic algorithm over job orderings, kept as an
//! alternative heuristic to compare against annealing.
//!
//! # Encoding
//!
//! A permutation of job positions (not processing times), so repeated
//! values remain distinct jobs through crossover. Children come from
//! one-point order crossover and are mutated by swapping two positions.
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

mod chromosome;
mod config;
mod solver;

pub use config::GeneticConfig;
pub use solver::{solve_genetic, GeneticSolver};
