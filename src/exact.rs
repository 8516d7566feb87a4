//! Exhaustive search over all job orderings.
//!
//! # Algorithm
//!
//! Orderings are generated lazily with Heap's algorithm, which moves from
//! one permutation to the next with a single transposition. The running
//! cost is updated with the O(1) [`swap_delta`] instead of being
//! recomputed, and is re-synchronised from scratch whenever a new best is
//! recorded so rounding never reaches a reported value.
//!
//! Permutations are over positions, not values: repeated processing times
//! yield repeated-cost orderings. Ties keep the earliest ordering found,
//! and the input order is always visited first.
//!
//! # Complexity
//! O(n!) time (amortized O(1) per ordering), O(n) space.
//!
//! # Reference
//! Heap (1963), "Permutations by Interchanges"; Sedgewick (1977),
//! "Permutation Generation Methods"

use tracing::{debug, trace, warn};

use crate::cost::{swap_delta, total_completion_time};
use crate::error::{SequencingError, SequencingResult};
use crate::models::{JobSet, Schedule};
use crate::resources::{estimate_exact_space, factorial};
use crate::solver::{Complexity, Sequencer, Solution};

/// Job count above which enumeration is flagged as expensive (12! ≈ 4.8e8).
pub const LARGE_INSTANCE_JOBS: usize = 12;

/// Provably optimal sequencer by exhaustive enumeration.
///
/// # Example
/// ```
/// use u_sequencing::exact::ExactSolver;
/// use u_sequencing::models::JobSet;
/// use u_sequencing::solver::Sequencer;
///
/// let jobs = JobSet::new(vec![4.0, 3.0, 2.0, 1.0]).unwrap();
/// let solution = ExactSolver.solve(&jobs).unwrap();
/// assert_eq!(solution.cost, 20.0);
/// assert_eq!(solution.schedule.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl Sequencer for ExactSolver {
    fn name(&self) -> &'static str {
        "Brute Force"
    }

    fn complexity(&self, n: usize) -> Complexity {
        Complexity {
            notation: "O(n!)",
            operations: factorial(n),
        }
    }

    fn space_estimate(&self, n: usize, element_size: usize) -> u128 {
        estimate_exact_space(n, element_size)
    }

    fn solve(&mut self, jobs: &JobSet) -> SequencingResult<Solution> {
        solve_exact(jobs)
    }
}

/// Returns the ordering of `jobs` with the minimum total completion time.
///
/// Fails with `EmptyInput` if `jobs` is empty.
pub fn solve_exact(jobs: &JobSet) -> SequencingResult<Solution> {
    if jobs.is_empty() {
        return Err(SequencingError::EmptyInput);
    }

    let n = jobs.len();
    if n > LARGE_INSTANCE_JOBS {
        warn!(
            jobs = n,
            orderings = %factorial(n),
            "exhaustive search over a large instance"
        );
    }

    let mut current = jobs.as_slice().to_vec();
    let mut current_cost = total_completion_time(&current);
    let mut best = Solution::new(Schedule::new(current.clone()), current_cost);

    // Heap's algorithm, iterative form
    let mut counters = vec![0usize; n];
    let mut i = 1;
    while i < n {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            current_cost += swap_delta(&current, j, i);
            current.swap(j, i);
            best.evaluations = best.evaluations.saturating_add(1);

            if current_cost < best.cost {
                current_cost = total_completion_time(&current);
                if current_cost < best.cost {
                    trace!(cost = current_cost, "new best ordering");
                    best.schedule = Schedule::new(current.clone());
                    best.cost = current_cost;
                    best.improvements += 1;
                }
            }

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    debug!(
        jobs = n,
        evaluations = best.evaluations,
        cost = best.cost,
        "exhaustive search finished"
    );
    Ok(best)
}
