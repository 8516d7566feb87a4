//! Measurement harness comparing the sequencers.
//!
//! # Algorithm
//!
//! 1. Estimate space for every configured solver.
//! 2. Run the exhaustive solver (unless the instance exceeds the
//!    configured job limit), then simulated annealing, then the genetic
//!    search if enabled, then the SPT and LPT baselines, each wrapped in
//!    wall-clock timing.
//! 3. Annotate each run with its theoretical operation count, its space
//!    estimate and its gap to the optimum (the SPT order, optimal for this
//!    objective).
//!
//! Runs are strictly sequential and share only the read-only job set.
//! Each stochastic solver gets its own generator, seeded by one draw from
//! a root generator built from the user seed.

mod report;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::annealing::{AnnealingConfig, AnnealingSolver};
use crate::dispatching::{rules, DispatchSequencer};
use crate::error::SequencingResult;
use crate::exact::ExactSolver;
use crate::ga::{GeneticConfig, GeneticSolver};
use crate::models::JobSet;
use crate::resources::DEFAULT_ELEMENT_SIZE;
use crate::solver::Sequencer;

pub use report::{ComparisonReport, SolverRun, SpaceEstimate};

/// Configured comparison over one job set.
///
/// # Example
///
/// ```
/// use u_sequencing::harness::Harness;
/// use u_sequencing::models::JobSet;
///
/// let jobs = JobSet::new(vec![2.0, 1.0, 3.0, 4.0]).unwrap();
/// let report = Harness::new(jobs).with_seed(42).run().unwrap();
///
/// assert_eq!(report.optimal_cost, 20.0);
/// assert_eq!(report.run("Brute Force").unwrap().cost, 20.0);
/// println!("{report}");
/// ```
#[derive(Debug, Clone)]
pub struct Harness {
    jobs: JobSet,
    annealing: AnnealingConfig,
    genetic: Option<GeneticConfig>,
    seed: Option<u64>,
    element_size: usize,
    exact_job_limit: Option<usize>,
}

impl Harness {
    /// Creates a harness with default annealing parameters.
    pub fn new(jobs: JobSet) -> Self {
        Self {
            jobs,
            annealing: AnnealingConfig::default(),
            genetic: None,
            seed: None,
            element_size: DEFAULT_ELEMENT_SIZE,
            exact_job_limit: None,
        }
    }

    /// Sets the annealing parameters.
    pub fn with_annealing(mut self, config: AnnealingConfig) -> Self {
        self.annealing = config;
        self
    }

    /// Enables the genetic search.
    pub fn with_genetic(mut self, config: GeneticConfig) -> Self {
        self.genetic = Some(config);
        self
    }

    /// Seeds the stochastic solvers. Unseeded runs draw from the OS.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the bytes per job used for space estimates.
    pub fn with_element_size(mut self, bytes: usize) -> Self {
        self.element_size = bytes;
        self
    }

    /// Skips the exhaustive solver above `jobs` jobs.
    pub fn with_exact_job_limit(mut self, jobs: usize) -> Self {
        self.exact_job_limit = Some(jobs);
        self
    }

    /// The job set under comparison.
    pub fn jobs(&self) -> &JobSet {
        &self.jobs
    }

    /// Runs every configured solver and collects the report.
    ///
    /// Fails with the first solver error; no partial report is returned.
    pub fn run(&self) -> SequencingResult<ComparisonReport> {
        let n = self.jobs.len();
        let optimal_cost = DispatchSequencer::new(rules::Spt).solve(&self.jobs)?.cost;

        let mut solvers: Vec<Box<dyn Sequencer>> = Vec::new();
        let mut skipped = Vec::new();
        let mut root = self.seed.map(StdRng::seed_from_u64);

        match self.exact_job_limit {
            Some(limit) if n > limit => {
                warn!(jobs = n, limit, "skipping exhaustive search");
                skipped.push(ExactSolver.name());
            }
            _ => solvers.push(Box::new(ExactSolver)),
        }
        solvers.push(Box::new(AnnealingSolver::new(
            self.annealing,
            stream_rng(&mut root),
        )));
        if let Some(config) = self.genetic {
            solvers.push(Box::new(GeneticSolver::new(config, stream_rng(&mut root))));
        }
        solvers.push(Box::new(DispatchSequencer::new(rules::Spt)));
        solvers.push(Box::new(DispatchSequencer::new(rules::Lpt)));

        // Estimates cover skipped solvers too
        let mut space_estimates = Vec::with_capacity(solvers.len() + skipped.len());
        if !skipped.is_empty() {
            space_estimates.push(SpaceEstimate {
                solver: ExactSolver.name(),
                bytes: ExactSolver.space_estimate(n, self.element_size),
            });
        }
        space_estimates.extend(solvers.iter().map(|s| SpaceEstimate {
            solver: s.name(),
            bytes: s.space_estimate(n, self.element_size),
        }));

        let mut runs = Vec::with_capacity(solvers.len());
        for solver in solvers.iter_mut() {
            runs.push(self.timed(solver.as_mut(), optimal_cost)?);
        }

        Ok(ComparisonReport {
            jobs: self.jobs.as_slice().to_vec(),
            element_size: self.element_size,
            optimal_cost,
            space_estimates,
            runs,
            skipped,
        })
    }

    fn timed(&self, solver: &mut dyn Sequencer, optimal_cost: f64) -> SequencingResult<SolverRun> {
        let start = Instant::now();
        let solution = solver.solve(&self.jobs)?;
        let elapsed_ns = start.elapsed().as_nanos().max(1);

        info!(
            solver = solver.name(),
            cost = solution.cost,
            elapsed_ns = %elapsed_ns,
            "solver finished"
        );

        Ok(SolverRun {
            solver: solver.name(),
            gap: solution.cost - optimal_cost,
            complexity: solver.complexity(self.jobs.len()),
            space_bytes: solver.space_estimate(self.jobs.len(), self.element_size),
            schedule: solution.schedule,
            cost: solution.cost,
            elapsed_ns,
            evaluations: solution.evaluations,
            improvements: solution.improvements,
        })
    }
}

/// Next per-solver generator: drawn from `root` when seeded, else from the OS.
fn stream_rng(root: &mut Option<StdRng>) -> StdRng {
    match root {
        Some(root) => StdRng::seed_from_u64(root.random()),
        None => StdRng::from_os_rng(),
    }
}
