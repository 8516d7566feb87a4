//! Dispatching rules for single-machine sequencing.
//!
//! A dispatching rule scores each job independently; the sequence is the
//! jobs sorted by score. For total completion time on one machine, SPT is
//! optimal, which makes [`rules::Spt`] the reference the exhaustive solver
//! is checked against. LPT yields the worst ordering, an upper bound for
//! every other sequencer.
//!
//! # Usage
//!
//! ```
//! use u_sequencing::dispatching::{rules, DispatchSequencer};
//! use u_sequencing::models::JobSet;
//! use u_sequencing::solver::Sequencer;
//!
//! let jobs = JobSet::new(vec![3.0, 1.0, 2.0]).unwrap();
//! let solution = DispatchSequencer::new(rules::Spt).solve(&jobs).unwrap();
//! assert_eq!(solution.schedule.as_slice(), &[1.0, 2.0, 3.0]);
//! assert_eq!(solution.cost, 10.0);
//! ```
//!
//! # References
//!
//! - Smith (1956), "Various optimizers for single-stage production"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3.1

pub mod rules;

use std::fmt::Debug;

use crate::cost::total_completion_time;
use crate::error::{SequencingError, SequencingResult};
use crate::models::{JobSet, Schedule};
use crate::solver::{Complexity, Sequencer, Solution};

/// Score returned by a dispatching rule.
///
/// Lower scores = scheduled earlier.
pub type RuleScore = f64;

/// A dispatching rule that scores one job.
///
/// # Score Convention
/// **Lower score = earlier position.** Ties keep input order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT").
    fn name(&self) -> &'static str;

    /// Scores the job at input `position` with the given processing time.
    fn evaluate(&self, position: usize, processing_time: f64) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Input positions of `jobs` sorted by `rule` (stable).
pub fn sort_indices<D: DispatchingRule + ?Sized>(jobs: &JobSet, rule: &D) -> Vec<usize> {
    let scores: Vec<RuleScore> = jobs
        .iter()
        .enumerate()
        .map(|(pos, &t)| rule.evaluate(pos, t))
        .collect();
    let mut indices: Vec<usize> = (0..jobs.len()).collect();
    indices.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    indices
}

/// Sequencer that orders jobs by a single dispatching rule.
#[derive(Debug, Clone)]
pub struct DispatchSequencer<D> {
    rule: D,
}

impl<D: DispatchingRule> DispatchSequencer<D> {
    /// Creates a sequencer for `rule`.
    pub fn new(rule: D) -> Self {
        Self { rule }
    }

    /// The underlying rule.
    pub fn rule(&self) -> &D {
        &self.rule
    }
}

impl<D: DispatchingRule> Sequencer for DispatchSequencer<D> {
    fn name(&self) -> &'static str {
        self.rule.description()
    }

    fn complexity(&self, n: usize) -> Complexity {
        let log_n = (usize::BITS - n.leading_zeros()).max(1) as u128;
        Complexity {
            notation: "O(n log n)",
            operations: (n as u128).saturating_mul(log_n),
        }
    }

    fn space_estimate(&self, n: usize, element_size: usize) -> u128 {
        (n as u128).saturating_mul(element_size as u128)
    }

    fn solve(&mut self, jobs: &JobSet) -> SequencingResult<Solution> {
        if jobs.is_empty() {
            return Err(SequencingError::EmptyInput);
        }
        let order = sort_indices(jobs, &self.rule);
        let schedule = Schedule::from_order(jobs, &order)?;
        let cost = total_completion_time(schedule.as_slice());
        Ok(Solution::new(schedule, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::exact::solve_exact;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn jobs(times: &[f64]) -> JobSet {
        JobSet::new(times.to_vec()).unwrap()
    }

    #[test]
    fn test_sort_indices_stable() {
        let set = jobs(&[2.0, 1.0, 2.0, 0.5]);
        assert_eq!(sort_indices(&set, &rules::Spt), vec![3, 1, 0, 2]);
        assert_eq!(sort_indices(&set, &rules::Lpt), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_spt_is_optimal() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..30 {
            let n = rng.random_range(1..=6);
            let times: Vec<f64> = (0..n).map(|_| rng.random_range(0..15) as f64).collect();
            let set = jobs(&times);

            let spt = DispatchSequencer::new(rules::Spt).solve(&set).unwrap();
            let exact = solve_exact(&set).unwrap();
            assert_eq!(spt.cost, exact.cost, "jobs = {times:?}");
        }
    }

    #[test]
    fn test_lpt_is_worst() {
        let set = jobs(&[1.0, 2.0, 3.0, 4.0]);
        let lpt = DispatchSequencer::new(rules::Lpt).solve(&set).unwrap();
        assert_eq!(lpt.schedule.as_slice(), &[4.0, 3.0, 2.0, 1.0]);
        assert_eq!(lpt.cost, 30.0);
    }

    #[test]
    fn test_equal_times_keep_input_order() {
        let set = jobs(&[2.0, 2.0, 2.0]);
        assert_eq!(sort_indices(&set, &rules::Spt), vec![0, 1, 2]);
        assert_eq!(sort_indices(&set, &rules::Lpt), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        let err = DispatchSequencer::new(rules::Spt)
            .solve(&jobs(&[]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    #[test]
    fn test_sequencer_name() {
        let seq = DispatchSequencer::new(rules::Spt);
        assert_eq!(seq.name(), "Shortest Processing Time");
        assert_eq!(seq.rule().name(), "SPT");
        assert_eq!(seq.complexity(4).operations, 12);
    }
}
