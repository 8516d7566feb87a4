//! Single-machine job sequencing for total completion time.
//!
//! Orders a fixed set of jobs on one machine so that the sum of completion
//! times is minimal, and compares an exhaustive exact solver against
//! stochastic local search on cost, solution quality and resource usage.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`JobSet`, `Schedule`, `Cost`)
//! - **`cost`**: Objective function and O(1) swap delta
//! - **`validation`**: Permutation checks for candidate schedules
//! - **`exact`**: Exhaustive search (Heap's algorithm, incremental cost)
//! - **`annealing`**: Simulated annealing with injected randomness
//! - **`ga`**: Genetic search over job orderings
//! - **`dispatching`**: SPT / LPT dispatching rules
//! - **`resources`**: Static memory estimates
//! - **`harness`**: Timed comparison and report
//!
//! # Example
//!
//! ```
//! use u_sequencing::annealing::{solve_annealing, AnnealingConfig};
//! use u_sequencing::exact::solve_exact;
//! use u_sequencing::models::JobSet;
//! use rand::SeedableRng;
//!
//! let jobs = JobSet::new(vec![4.0, 3.0, 2.0, 1.0]).unwrap();
//! assert_eq!(solve_exact(&jobs).unwrap().cost, 20.0);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let sa = solve_annealing(&jobs, &AnnealingConfig::default(), &mut rng).unwrap();
//! assert!(sa.cost <= 30.0);
//! ```
//!
//! # References
//!
//! - Smith (1956), "Various optimizers for single-stage production"
//! - Kirkpatrick et al. (1983), "Optimization by Simulated Annealing"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod annealing;
pub mod cost;
pub mod dispatching;
pub mod error;
pub mod exact;
pub mod ga;
pub mod harness;
pub mod models;
pub mod resources;
pub mod solver;
pub mod validation;

pub use error::{ErrorKind, SequencingError, SequencingResult};
