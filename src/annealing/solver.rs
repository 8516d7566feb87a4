//! Simulated annealing sequencer.
//!
//! # Algorithm
//!
//! 1. Start from the input order; best := current.
//! 2. Repeat `max_iterations` times:
//!    - pick two distinct positions uniformly at random,
//!    - Δ := cost change of swapping them (O(1), see [`swap_delta`]),
//!    - accept if Δ < 0, else with probability exp(−Δ / T),
//!    - on acceptance apply the swap and record a new best if strictly better,
//!    - T := T · cooling_rate.
//! 3. Return the best schedule seen (not necessarily the final one).
//!
//! # Complexity
//! O(max_iterations) time plus O(n) per new best, O(n) space.
//!
//! # Reference
//! Kirkpatrick et al. (1983), "Optimization by Simulated Annealing";
//! Metropolis et al. (1953)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::{AnnealingConfig, ExponentialCooling};
use crate::cost::{swap_delta, total_completion_time};
use crate::error::{SequencingError, SequencingResult};
use crate::models::{JobSet, Schedule};
use crate::resources::estimate_annealing_space;
use crate::solver::{Complexity, Sequencer, Solution};

/// Simulated annealing sequencer with an injected random source.
///
/// # Example
/// ```
/// use u_sequencing::annealing::{AnnealingConfig, AnnealingSolver};
/// use u_sequencing::models::JobSet;
/// use u_sequencing::solver::Sequencer;
///
/// let jobs = JobSet::new(vec![2.0, 1.0, 3.0, 4.0]).unwrap();
/// let mut solver = AnnealingSolver::seeded(AnnealingConfig::default(), 42);
/// let solution = solver.solve(&jobs).unwrap();
/// assert!(solution.cost <= 21.0);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingSolver<R> {
    config: AnnealingConfig,
    rng: R,
}

impl<R: Rng> AnnealingSolver<R> {
    /// Creates a solver drawing randomness from `rng`.
    pub fn new(config: AnnealingConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Solver parameters.
    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }
}

impl AnnealingSolver<StdRng> {
    /// Creates a reproducible solver from a seed.
    pub fn seeded(config: AnnealingConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + std::fmt::Debug> Sequencer for AnnealingSolver<R> {
    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }

    fn complexity(&self, n: usize) -> Complexity {
        Complexity {
            notation: "O(max_iterations * n)",
            operations: (self.config.max_iterations as u128).saturating_mul(n as u128),
        }
    }

    fn space_estimate(&self, n: usize, element_size: usize) -> u128 {
        estimate_annealing_space(n, element_size)
    }

    fn solve(&mut self, jobs: &JobSet) -> SequencingResult<Solution> {
        solve_annealing(jobs, &self.config, &mut self.rng)
    }
}

/// Anneals `jobs` from their input order.
///
/// Fails with `InvalidParameter` if `jobs` is empty or `config` is out of
/// range. A single job is returned as-is without consuming randomness.
pub fn solve_annealing<R: Rng + ?Sized>(
    jobs: &JobSet,
    config: &AnnealingConfig,
    rng: &mut R,
) -> SequencingResult<Solution> {
    if jobs.is_empty() {
        return Err(SequencingError::invalid_parameter(
            "jobs",
            "annealing needs at least one job",
        ));
    }
    config.validate()?;

    let n = jobs.len();
    let mut current = jobs.as_slice().to_vec();
    let mut current_cost = total_completion_time(&current);
    let mut best = Solution::new(Schedule::new(current.clone()), current_cost);

    if n < 2 {
        return Ok(best);
    }

    debug!(
        jobs = n,
        initial_temperature = config.initial_temperature,
        cooling_rate = config.cooling_rate,
        max_iterations = config.max_iterations,
        initial_cost = current_cost,
        "annealing started"
    );

    let mut cooling = ExponentialCooling::new(config.initial_temperature, config.cooling_rate);
    let mut accepted: u64 = 0;

    for iteration in 0..config.max_iterations {
        let (i, j) = distinct_pair(n, rng);
        let delta = swap_delta(&current, i, j);

        let accept = if delta < 0.0 {
            true
        } else {
            let p = cooling.acceptance_probability(delta);
            p > 0.0 && rng.random::<f64>() < p
        };

        if accept {
            current.swap(i, j);
            current_cost += delta;
            accepted += 1;

            if current_cost < best.cost {
                current_cost = total_completion_time(&current);
                if current_cost < best.cost {
                    trace!(iteration, cost = current_cost, "new best schedule");
                    best.schedule = Schedule::new(current.clone());
                    best.cost = current_cost;
                    best.improvements += 1;
                }
            }
        }

        cooling.cool();
    }

    best.evaluations = best.evaluations.saturating_add(config.max_iterations);

    debug!(
        accepted,
        improvements = best.improvements,
        final_temperature = cooling.temperature(),
        cost = best.cost,
        "annealing finished"
    );
    Ok(best)
}

/// Two distinct positions in `0..n`, uniformly over unordered pairs.
fn distinct_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
