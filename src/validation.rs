//! Input validation for sequencing problems.
//!
//! Checks that a candidate schedule is a permutation of its job set:
//! - Same length
//! - Every processing time present exactly as often as in the job set
//!
//! Values are compared bit-exactly after a total-order sort, so the check
//! is O(n log n) and independent of input order.

use std::cmp::Ordering;

use crate::error::{SequencingError, SequencingResult};
use crate::models::{JobSet, Schedule};

/// Validates that `schedule` is a permutation of `jobs`.
///
/// # Returns
/// `Ok(())` if the schedule holds the job multiset exactly, otherwise
/// [`SequencingError::InvalidInput`] describing the first discrepancy.
pub fn validate_schedule(jobs: &JobSet, schedule: &Schedule) -> SequencingResult<()> {
    if schedule.len() != jobs.len() {
        return Err(SequencingError::invalid_input(format!(
            "schedule has {} jobs but the job set has {}",
            schedule.len(),
            jobs.len()
        )));
    }

    let expected = jobs.sorted_times();
    let mut actual = schedule.as_slice().to_vec();
    actual.sort_by(f64::total_cmp);

    for (&want, &got) in expected.iter().zip(&actual) {
        match got.total_cmp(&want) {
            Ordering::Equal => continue,
            // A smaller value showed up before the expected one: `got` is
            // either foreign or over-represented.
            Ordering::Less => {
                return Err(SequencingError::invalid_input(format!(
                    "schedule contains {got} more often than the job set"
                )));
            }
            Ordering::Greater => {
                return Err(SequencingError::invalid_input(format!(
                    "schedule is missing job with processing time {want}"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn jobs(times: &[f64]) -> JobSet {
        JobSet::new(times.to_vec()).unwrap()
    }

    #[test]
    fn test_valid_permutation() {
        let set = jobs(&[4.0, 3.0, 2.0, 1.0]);
        let s = Schedule::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert!(validate_schedule(&set, &s).is_ok());
    }

    #[test]
    fn test_valid_with_duplicates() {
        let set = jobs(&[2.0, 2.0, 5.0]);
        let s = Schedule::new(vec![2.0, 5.0, 2.0]);
        assert!(validate_schedule(&set, &s).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let set = jobs(&[1.0, 2.0, 3.0]);
        let err = validate_schedule(&set, &Schedule::new(vec![1.0, 2.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("2 jobs"));
    }

    #[test]
    fn test_foreign_element() {
        let set = jobs(&[1.0, 2.0, 3.0]);
        let err = validate_schedule(&set, &Schedule::new(vec![1.0, 2.0, 7.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_duplicated_element() {
        let set = jobs(&[1.0, 2.0, 3.0]);
        let err = validate_schedule(&set, &Schedule::new(vec![1.0, 1.0, 3.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("more often"));
    }

    #[test]
    fn test_empty_pair() {
        assert!(validate_schedule(&jobs(&[]), &Schedule::default()).is_ok());
    }
}
