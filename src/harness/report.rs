//! Comparison report.
//!
//! Collects, per solver, the schedule found, its cost, the measured time
//! and the theoretical cost annotations, so measured and asymptotic growth
//! can be read side by side.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Cost | Sum of completion times of the returned schedule |
//! | Gap | cost − optimal cost (optimal = SPT order) |
//! | Elapsed | Wall-clock nanoseconds, never below 1 |
//! | Operations | Theoretical operation count for n jobs |
//! | Space | Estimated bytes (n!·s, n·s, p·n·s) |

use std::fmt;

use serde::Serialize;

use crate::models::{Cost, Schedule};
use crate::solver::Complexity;

/// Estimated memory of one solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceEstimate {
    /// Solver name.
    pub solver: &'static str,
    /// Estimated bytes.
    pub bytes: u128,
}

/// Outcome of one timed solver run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverRun {
    /// Solver name.
    pub solver: &'static str,
    /// Best schedule found.
    pub schedule: Schedule,
    /// Cost of `schedule`.
    pub cost: Cost,
    /// Cost above the optimum (0 when optimal).
    pub gap: Cost,
    /// Wall-clock time in nanoseconds (at least 1).
    pub elapsed_ns: u128,
    /// Theoretical operation count.
    pub complexity: Complexity,
    /// Estimated working memory in bytes.
    pub space_bytes: u128,
    /// Candidate schedules evaluated.
    pub evaluations: u64,
    /// Best-so-far improvements.
    pub improvements: u64,
}

impl SolverRun {
    /// Whether the run reached the optimum.
    pub fn is_optimal(&self) -> bool {
        self.gap <= 0.0
    }
}

/// Full comparison of all solvers over one job set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Input processing times.
    pub jobs: Vec<f64>,
    /// Bytes per job used for space estimates.
    pub element_size: usize,
    /// Optimal cost (shortest-processing-time order).
    pub optimal_cost: Cost,
    /// Space estimate per solver.
    pub space_estimates: Vec<SpaceEstimate>,
    /// Timed runs in execution order.
    pub runs: Vec<SolverRun>,
    /// Solvers skipped because the instance exceeded their limit.
    pub skipped: Vec<&'static str>,
}

impl ComparisonReport {
    /// Finds the run of `solver`.
    pub fn run(&self, solver: &str) -> Option<&SolverRun> {
        self.runs.iter().find(|r| r.solver == solver)
    }
}

struct Sequence<'a>(&'a [f64]);

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{t}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Jobs: {}", Sequence(&self.jobs))?;
        writeln!(f)?;
        for estimate in &self.space_estimates {
            writeln!(
                f,
                "Estimated Space Complexity ({}): {} bytes",
                estimate.solver, estimate.bytes
            )?;
        }
        for skipped in &self.skipped {
            writeln!(f)?;
            writeln!(f, "{skipped}: skipped (instance too large)")?;
        }
        for run in &self.runs {
            writeln!(f)?;
            writeln!(f, "{} Schedule: {}", run.solver, Sequence(run.schedule.as_slice()))?;
            writeln!(f, "Total Completion Time ({}): {}", run.solver, run.cost)?;
            writeln!(f, "Execution Time ({}): {} nanoseconds", run.solver, run.elapsed_ns)?;
            writeln!(f, "Expected Time Complexity: {}", run.complexity)?;
            writeln!(f, "Estimated Space: {} bytes", run.space_bytes)?;
            if !run.is_optimal() {
                writeln!(f, "Gap to Optimum: {}", run.gap)?;
            }
        }
        Ok(())
    }
}
