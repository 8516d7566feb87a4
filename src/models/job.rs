//! Job set model.
//!
//! A job is nothing more than a non-negative processing time. Jobs have no
//! identity beyond their value and position, so duplicate values are legal
//! and count as distinct jobs.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3.1

use serde::{Deserialize, Serialize};

use crate::error::{SequencingError, SequencingResult};

/// Processing time of a single job.
pub type ProcessingTime = f64;

/// An ordered, immutable set of jobs fixed for one solver invocation.
///
/// # Example
/// ```
/// use u_sequencing::models::JobSet;
///
/// let jobs = JobSet::new(vec![4.0, 3.0, 2.0, 1.0]).unwrap();
/// assert_eq!(jobs.len(), 4);
/// assert_eq!(jobs.total_processing_time(), 10.0);
/// assert!(JobSet::new(vec![1.0, -2.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct JobSet {
    times: Vec<ProcessingTime>,
}

impl JobSet {
    /// Creates a job set, rejecting negative, NaN or infinite times.
    pub fn new(times: Vec<ProcessingTime>) -> SequencingResult<Self> {
        for (idx, &t) in times.iter().enumerate() {
            if !t.is_finite() || t < 0.0 {
                return Err(SequencingError::invalid_input(format!(
                    "job {idx} has processing time {t}; expected a finite value >= 0"
                )));
            }
        }
        Ok(Self { times })
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the set has no jobs.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Processing times in input order.
    pub fn as_slice(&self) -> &[ProcessingTime] {
        &self.times
    }

    /// Iterates processing times in input order.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessingTime> {
        self.times.iter()
    }

    /// Sum of all processing times (the makespan of any ordering).
    pub fn total_processing_time(&self) -> f64 {
        self.times.iter().sum()
    }

    /// Processing times sorted ascending with a total order.
    pub(crate) fn sorted_times(&self) -> Vec<ProcessingTime> {
        let mut sorted = self.times.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

impl TryFrom<Vec<f64>> for JobSet {
    type Error = SequencingError;

    fn try_from(times: Vec<f64>) -> SequencingResult<Self> {
        Self::new(times)
    }
}

impl From<JobSet> for Vec<f64> {
    fn from(jobs: JobSet) -> Self {
        jobs.times
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_job_set_new() {
        let jobs = JobSet::new(vec![2.0, 1.0, 3.0, 4.0]).unwrap();
        assert_eq!(jobs.len(), 4);
        assert!(!jobs.is_empty());
        assert_eq!(jobs.as_slice(), &[2.0, 1.0, 3.0, 4.0]);
        assert_eq!(jobs.total_processing_time(), 10.0);
    }

    #[test]
    fn test_zero_and_duplicates_allowed() {
        let jobs = JobSet::new(vec![0.0, 3.0, 3.0]).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs.sorted_times(), vec![0.0, 3.0, 3.0]);
    }

    #[test]
    fn test_empty_allowed() {
        let jobs = JobSet::new(vec![]).unwrap();
        assert!(jobs.is_empty());
        assert_eq!(jobs.total_processing_time(), 0.0);
    }

    #[test]
    fn test_rejects_negative() {
        let err = JobSet::new(vec![1.0, -0.5]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("job 1"));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(JobSet::new(vec![f64::NAN]).is_err());
        assert!(JobSet::new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let jobs = JobSet::new(vec![1.5, 2.0]).unwrap();
        let json = serde_json::to_string(&jobs).unwrap();
        assert_eq!(json, "[1.5,2.0]");
        let back: JobSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, jobs);
        assert!(serde_json::from_str::<JobSet>("[-1.0]").is_err());
    }
}
