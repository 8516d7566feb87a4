//! Common solver interface.
//!
//! Every strategy (exhaustive, annealing, genetic, dispatching) implements
//! [`Sequencer`] so the harness can drive, time and annotate them
//! uniformly.

use std::fmt::{self, Debug};

use serde::Serialize;

use crate::error::SequencingResult;
use crate::models::{Cost, JobSet, Schedule};

/// Best schedule found by a solver, with search statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Best schedule found.
    pub schedule: Schedule,
    /// Cost of `schedule`.
    pub cost: Cost,
    /// Number of candidate schedules evaluated.
    pub evaluations: u64,
    /// Number of times the best-so-far cost strictly improved.
    pub improvements: u64,
}

impl Solution {
    pub(crate) fn new(schedule: Schedule, cost: Cost) -> Self {
        Self {
            schedule,
            cost,
            evaluations: 1,
            improvements: 0,
        }
    }
}

/// Theoretical operation count of a solver run.
///
/// Used to annotate measured times so they can be compared against the
/// asymptotic growth of each strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Complexity {
    /// Big-O notation, e.g. `"O(n!)"`.
    pub notation: &'static str,
    /// Operation count for the concrete input (saturating).
    pub operations: u128,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} operations", self.notation, self.operations)
    }
}

/// A strategy that orders a job set to minimize total completion time.
pub trait Sequencer: Debug {
    /// Short display name (e.g., "Simulated Annealing").
    fn name(&self) -> &'static str;

    /// Theoretical operation count for `n` jobs.
    fn complexity(&self, n: usize) -> Complexity;

    /// Estimated working memory in bytes for `n` jobs of `element_size`
    /// bytes each.
    fn space_estimate(&self, n: usize, element_size: usize) -> u128;

    /// Computes a schedule for `jobs`.
    fn solve(&mut self, jobs: &JobSet) -> SequencingResult<Solution>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_display() {
        let c = Complexity {
            notation: "O(n!)",
            operations: 24,
        };
        assert_eq!(c.to_string(), "O(n!) = 24 operations");
    }

    #[test]
    fn test_solution_new() {
        let s = Solution::new(Schedule::new(vec![1.0]), 1.0);
        assert_eq!(s.evaluations, 1);
        assert_eq!(s.improvements, 0);
    }
}
