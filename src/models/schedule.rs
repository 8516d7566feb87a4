//! Schedule (solution) model.
//!
//! A schedule is one candidate execution order of a job set. Solvers
//! produce schedules and never mutate one after reporting it as a best
//! candidate; every update copies.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::{JobSet, ProcessingTime};
use crate::error::{SequencingError, SequencingResult};

/// Objective value of a schedule: the sum of job completion times.
///
/// Non-negative; lower is better.
pub type Cost = f64;

/// An ordered sequence of processing times denoting execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    sequence: Vec<ProcessingTime>,
}

impl Schedule {
    /// Creates a schedule from an execution order.
    pub fn new(sequence: Vec<ProcessingTime>) -> Self {
        Self { sequence }
    }

    /// The schedule that runs jobs in their input order.
    pub fn identity(jobs: &JobSet) -> Self {
        Self::new(jobs.as_slice().to_vec())
    }

    /// Builds a schedule from job positions (`order[k]` = index of the
    /// k-th job to run).
    ///
    /// Fails with `InvalidInput` unless `order` is a permutation of
    /// `0..jobs.len()`.
    pub fn from_order(jobs: &JobSet, order: &[usize]) -> SequencingResult<Self> {
        let times = jobs.as_slice();
        if order.len() != times.len() {
            return Err(SequencingError::invalid_input(format!(
                "order has {} positions, expected {}",
                order.len(),
                times.len()
            )));
        }
        let mut seen = vec![false; times.len()];
        for &idx in order {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(SequencingError::invalid_input(format!(
                        "position {idx} appears more than once"
                    )))
                }
                None => {
                    return Err(SequencingError::invalid_input(format!(
                        "position {idx} out of range for {} jobs",
                        times.len()
                    )))
                }
            }
        }
        Ok(Self::new(order.iter().map(|&idx| times[idx]).collect()))
    }

    /// Number of scheduled jobs.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Processing times in execution order.
    pub fn as_slice(&self) -> &[ProcessingTime] {
        &self.sequence
    }

    /// Consumes the schedule, returning the execution order.
    pub fn into_inner(self) -> Vec<ProcessingTime> {
        self.sequence
    }

    /// Completion time of each job (running prefix sums).
    ///
    /// For `[1, 2, 3, 4]` this is `[1, 3, 6, 10]`.
    pub fn completion_times(&self) -> Vec<f64> {
        self.sequence
            .iter()
            .scan(0.0, |elapsed, &t| {
                *elapsed += t;
                Some(*elapsed)
            })
            .collect()
    }

    /// Completion time of the last job.
    pub fn makespan(&self) -> f64 {
        self.sequence.iter().sum()
    }

    /// Whether this schedule contains every job of `jobs` exactly as often
    /// as it occurs there.
    pub fn is_permutation_of(&self, jobs: &JobSet) -> bool {
        if self.sequence.len() != jobs.len() {
            return false;
        }
        let mut mine = self.sequence.clone();
        mine.sort_by(f64::total_cmp);
        mine == jobs.sorted_times()
    }
}

impl From<Vec<f64>> for Schedule {
    fn from(sequence: Vec<f64>) -> Self {
        Self::new(sequence)
    }
}
