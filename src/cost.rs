//! Total completion time objective.
//!
//! The completion time of the k-th job is the sum of the first k
//! processing times; the cost of a schedule is the sum of all completion
//! times. Equivalently, the job at 0-based position i is counted `n - i`
//! times:
//!
//! ```text
//! cost(s) = Σ_i s[i] · (n − i)
//! ```
//!
//! The weighted form gives an O(1) cost change for swapping two
//! positions, which both the exact and the annealing solver use to avoid
//! an O(n) recomputation per candidate.
//!
//! # Reference
//! Smith (1956), "Various optimizers for single-stage production"

use crate::error::SequencingResult;
use crate::models::{Cost, JobSet, Schedule};
use crate::validation::validate_schedule;

/// Evaluates schedules of one job set.
///
/// # Example
/// ```
/// use u_sequencing::cost::CostModel;
/// use u_sequencing::models::{JobSet, Schedule};
///
/// let jobs = JobSet::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let model = CostModel::new(&jobs);
/// // Completion times 1, 3, 6, 10
/// assert_eq!(model.cost(&Schedule::new(vec![1.0, 2.0, 3.0, 4.0])).unwrap(), 20.0);
/// assert_eq!(model.cost(&Schedule::new(vec![4.0, 3.0, 2.0, 1.0])).unwrap(), 30.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    jobs: &'a JobSet,
}

impl<'a> CostModel<'a> {
    /// Creates a cost model for `jobs`.
    pub fn new(jobs: &'a JobSet) -> Self {
        Self { jobs }
    }

    /// The job set schedules are checked against.
    pub fn jobs(&self) -> &JobSet {
        self.jobs
    }

    /// Cost of `schedule`.
    ///
    /// Fails with `InvalidInput` unless `schedule` is a permutation of the
    /// job set.
    pub fn cost(&self, schedule: &Schedule) -> SequencingResult<Cost> {
        validate_schedule(self.jobs, schedule)?;
        Ok(total_completion_time(schedule.as_slice()))
    }

    /// Cost of running the jobs in input order.
    pub fn initial_cost(&self) -> Cost {
        total_completion_time(self.jobs.as_slice())
    }
}

/// Sum of completion times of `sequence`, without validation.
///
/// O(n) time, O(1) extra space.
pub fn total_completion_time(sequence: &[f64]) -> Cost {
    let mut elapsed = 0.0;
    let mut total = 0.0;
    for &t in sequence {
        elapsed += t;
        total += elapsed;
    }
    total
}

/// Exact change in cost from swapping positions `i` and `j` of `sequence`.
///
/// Only the two swapped jobs change weight, so the delta is
/// `(s[j] − s[i]) · (j − i)` regardless of which index is larger.
///
/// # Panics
/// Panics if either index is out of bounds.
pub fn swap_delta(sequence: &[f64], i: usize, j: usize) -> Cost {
    (sequence[j] - sequence[i]) * (j as f64 - i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_total_completion_time() {
        assert_eq!(total_completion_time(&[1.0, 2.0, 3.0, 4.0]), 20.0);
        assert_eq!(total_completion_time(&[4.0, 3.0, 2.0, 1.0]), 30.0);
        assert_eq!(total_completion_time(&[2.0, 1.0, 3.0, 4.0]), 21.0);
        assert_eq!(total_completion_time(&[]), 0.0);
        assert_eq!(total_completion_time(&[7.0]), 7.0);
    }

    #[test]
    fn test_matches_completion_times() {
        let s = Schedule::new(vec![3.0, 1.0, 4.0, 1.0, 5.0]);
        let sum: f64 = s.completion_times().iter().sum();
        assert_eq!(total_completion_time(s.as_slice()), sum);
    }

    #[test]
    fn test_matches_weighted_form() {
        let seq = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        let n = seq.len();
        let weighted: f64 = seq
            .iter()
            .enumerate()
            .map(|(i, &t)| t * (n - i) as f64)
            .sum();
        assert_eq!(total_completion_time(&seq), weighted);
    }

    #[test]
    fn test_cost_model_validates() {
        let jobs = JobSet::new(vec![1.0, 2.0, 3.0]).unwrap();
        let model = CostModel::new(&jobs);

        let err = model.cost(&Schedule::new(vec![1.0, 2.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = model.cost(&Schedule::new(vec![1.0, 2.0, 9.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        assert_eq!(model.cost(&Schedule::new(vec![3.0, 2.0, 1.0])).unwrap(), 14.0);
    }

    #[test]
    fn test_initial_cost() {
        let jobs = JobSet::new(vec![4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(CostModel::new(&jobs).initial_cost(), 30.0);
    }

    #[test]
    fn test_swap_delta_matches_recompute() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(2..10);
            let mut seq: Vec<f64> = (0..n).map(|_| rng.random_range(0..50) as f64).collect();
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);

            let before = total_completion_time(&seq);
            let delta = swap_delta(&seq, i, j);
            seq.swap(i, j);
            let after = total_completion_time(&seq);

            assert_eq!(before + delta, after, "swap ({i}, {j})");
        }
    }

    #[test]
    fn test_swap_delta_symmetric() {
        let seq = [5.0, 1.0, 8.0, 2.0];
        assert_eq!(swap_delta(&seq, 0, 3), swap_delta(&seq, 3, 0));
        assert_eq!(swap_delta(&seq, 1, 1), 0.0);
    }
}
