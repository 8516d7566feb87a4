//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for jobs that should run earlier.

use super::{DispatchingRule, RuleScore};

/// Shortest Processing Time.
///
/// Optimal for total (and mean) completion time on a single machine.
///
/// # Reference
/// Smith (1956)
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, _position: usize, processing_time: f64) -> RuleScore {
        processing_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Longest Processing Time.
///
/// Maximizes total completion time on a single machine; an upper bound
/// for any other ordering.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl DispatchingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, _position: usize, processing_time: f64) -> RuleScore {
        -processing_time
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spt() {
        assert!(Spt.evaluate(5, 1.0) < Spt.evaluate(0, 2.0));
    }

    #[test]
    fn test_lpt() {
        assert!(Lpt.evaluate(5, 2.0) < Lpt.evaluate(0, 1.0));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Spt.description(), "Shortest Processing Time");
        assert_eq!(Lpt.description(), "Longest Processing Time");
        assert_eq!(Lpt.name(), "LPT");
    }
}
