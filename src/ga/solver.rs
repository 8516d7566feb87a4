//! Generational genetic search.
//!
//! # Algorithm
//!
//! 1. Seed the population with random orderings.
//! 2. Each generation: evaluate and sort by cost, then record the best-ever
//!    individual.
//! 3. Between generations: copy the `elite_count` best unchanged, then fill
//!    the population with children of two parents drawn (with replacement)
//!    from the `parent_pool` best; each child is mutated with probability
//!    `mutation_rate`.
//! 4. Return the best individual seen.
//!
//! The input order is evaluated first, so the result is never worse than
//! running the jobs as given.
//!
//! # Complexity
//! O(generations · population · (n + log population)) time,
//! O(population · n) space.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::chromosome::{one_point_crossover, swap_mutation, SequenceChromosome};
use super::config::GeneticConfig;
use crate::error::{SequencingError, SequencingResult};
use crate::models::JobSet;
use crate::resources::estimate_genetic_space;
use crate::solver::{Complexity, Sequencer, Solution};

/// Genetic sequencer with an injected random source.
///
/// # Example
/// ```
/// use u_sequencing::ga::{GeneticConfig, GeneticSolver};
/// use u_sequencing::models::JobSet;
/// use u_sequencing::solver::Sequencer;
///
/// let jobs = JobSet::new(vec![2.0, 1.0, 3.0, 4.0]).unwrap();
/// let config = GeneticConfig::default().with_generations(50);
/// let solution = GeneticSolver::seeded(config, 42).solve(&jobs).unwrap();
/// assert_eq!(solution.cost, 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver<R> {
    config: GeneticConfig,
    rng: R,
}

impl<R: Rng> GeneticSolver<R> {
    /// Creates a solver drawing randomness from `rng`.
    pub fn new(config: GeneticConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Solver parameters.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }
}

impl GeneticSolver<StdRng> {
    /// Creates a reproducible solver from a seed.
    pub fn seeded(config: GeneticConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + std::fmt::Debug> Sequencer for GeneticSolver<R> {
    fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }

    fn complexity(&self, n: usize) -> Complexity {
        Complexity {
            notation: "O(generations * population * n)",
            operations: (self.config.generations as u128)
                .saturating_mul(self.config.population_size as u128)
                .saturating_mul(n as u128),
        }
    }

    fn space_estimate(&self, n: usize, element_size: usize) -> u128 {
        estimate_genetic_space(n, self.config.population_size, element_size)
    }

    fn solve(&mut self, jobs: &JobSet) -> SequencingResult<Solution> {
        solve_genetic(jobs, &self.config, &mut self.rng)
    }
}

/// Runs the genetic search on `jobs`.
///
/// Fails with `EmptyInput` for an empty job set and `InvalidParameter`
/// for an out-of-range `config`.
pub fn solve_genetic<R: Rng + ?Sized>(
    jobs: &JobSet,
    config: &GeneticConfig,
    rng: &mut R,
) -> SequencingResult<Solution> {
    if jobs.is_empty() {
        return Err(SequencingError::EmptyInput);
    }
    config.validate()?;

    let n = jobs.len();
    let mut best = SequenceChromosome::identity(n);
    best.evaluate(jobs);
    let mut evaluations: u64 = 1;
    let mut improvements: u64 = 0;

    debug!(
        jobs = n,
        population = config.population_size,
        generations = config.generations,
        "genetic search started"
    );

    let mut population: Vec<SequenceChromosome> = (0..config.population_size)
        .map(|_| SequenceChromosome::random(n, rng))
        .collect();
    let pool = config.parent_pool.min(config.population_size);

    for generation in 0..config.generations {
        if generation > 0 {
            population = breed(&population, config, pool, rng);
        }
        for individual in population.iter_mut() {
            individual.evaluate(jobs);
        }
        evaluations = evaluations.saturating_add(population.len() as u64);
        population.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));

        if population[0].fitness < best.fitness {
            trace!(generation, cost = population[0].fitness, "new best individual");
            best = population[0].clone();
            improvements += 1;
        }
    }

    debug!(
        evaluations,
        improvements,
        cost = best.fitness,
        "genetic search finished"
    );

    Ok(Solution {
        schedule: best.decode(jobs)?,
        cost: best.fitness,
        evaluations,
        improvements,
    })
}

/// Next generation from a population sorted best first.
fn breed<R: Rng + ?Sized>(
    population: &[SequenceChromosome],
    config: &GeneticConfig,
    pool: usize,
    rng: &mut R,
) -> Vec<SequenceChromosome> {
    let mut next = Vec::with_capacity(config.population_size);
    next.extend(population[..config.elite_count].iter().cloned());
    while next.len() < config.population_size {
        let p1 = &population[rng.random_range(0..pool)];
        let p2 = &population[rng.random_range(0..pool)];
        let mut child = one_point_crossover(p1, p2, rng);
        if rng.random_bool(config.mutation_rate) {
            swap_mutation(&mut child, rng);
        }
        next.push(child);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::total_completion_time;
    use crate::error::ErrorKind;
    use crate::exact::solve_exact;
    use rand::rngs::SmallRng;

    fn jobs(times: &[f64]) -> JobSet {
        JobSet::new(times.to_vec()).unwrap()
    }

    fn small_config() -> GeneticConfig {
        GeneticConfig::default()
            .with_population_size(30)
            .with_generations(40)
            .with_elite_count(3)
            .with_parent_pool(15)
    }

    #[test]
    fn test_finds_optimum_on_small_instance() {
        let set = jobs(&[9.0, 3.0, 7.0, 1.0, 5.0, 8.0]);
        let mut rng = SmallRng::seed_from_u64(42);
        let config = GeneticConfig::default().with_generations(100);
        let s = solve_genetic(&set, &config, &mut rng).unwrap();

        assert!(s.schedule.is_permutation_of(&set));
        assert_eq!(s.cost, total_completion_time(s.schedule.as_slice()));
        assert_eq!(s.cost, solve_exact(&set).unwrap().cost);
    }

    #[test]
    fn test_zero_generations_returns_input() {
        let set = jobs(&[4.0, 3.0, 2.0, 1.0]);
        let config = small_config().with_generations(0);
        let mut rng = SmallRng::seed_from_u64(42);
        let s = solve_genetic(&set, &config, &mut rng).unwrap();
        assert_eq!(s.schedule.as_slice(), set.as_slice());
        assert_eq!(s.cost, 30.0);
    }

    #[test]
    fn test_duplicates_and_single_job() {
        let mut rng = SmallRng::seed_from_u64(42);
        let set = jobs(&[2.0, 2.0, 1.0, 2.0]);
        let s = solve_genetic(&set, &small_config(), &mut rng).unwrap();
        assert!(s.schedule.is_permutation_of(&set));
        assert_eq!(s.cost, 1.0 + 3.0 + 5.0 + 7.0);

        let s = solve_genetic(&jobs(&[3.0]), &small_config(), &mut rng).unwrap();
        assert_eq!(s.schedule.as_slice(), &[3.0]);
        assert_eq!(s.cost, 3.0);
    }

    #[test]
    fn test_deterministic_under_seed() {
        let set = jobs(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        let a = GeneticSolver::seeded(small_config(), 9).solve(&set).unwrap();
        let b = GeneticSolver::seeded(small_config(), 9).solve(&set).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_high_mutation_rate() {
        let set = jobs(&[6.0, 2.0, 9.0, 4.0, 1.0]);
        let config = small_config().with_mutation_rate(1.0);
        let mut rng = SmallRng::seed_from_u64(42);
        let s = solve_genetic(&set, &config, &mut rng).unwrap();
        assert!(s.schedule.is_permutation_of(&set));
        assert!(s.cost <= total_completion_time(set.as_slice()));
    }

    #[test]
    fn test_last_generation_not_bred() {
        let set = jobs(&[5.0, 1.0, 4.0, 2.0]);
        let config = small_config().with_generations(1);
        let mut rng = SmallRng::seed_from_u64(42);
        let s = solve_genetic(&set, &config, &mut rng).unwrap();
        assert_eq!(s.evaluations, 1 + config.population_size as u64);

        // Only the initial shuffles consume randomness
        let mut replay = SmallRng::seed_from_u64(42);
        for _ in 0..config.population_size {
            SequenceChromosome::random(set.len(), &mut replay);
        }
        assert_eq!(rng.random::<u64>(), replay.random::<u64>());
    }

    #[test]
    fn test_evaluation_count() {
        let set = jobs(&[3.0, 1.0, 2.0]);
        let config = small_config().with_generations(5);
        let mut rng = SmallRng::seed_from_u64(7);
        let s = solve_genetic(&set, &config, &mut rng).unwrap();
        assert_eq!(s.evaluations, 1 + 5 * config.population_size as u64);
    }

    #[test]
    fn test_errors() {
        let mut rng = SmallRng::seed_from_u64(42);
        let err = solve_genetic(&jobs(&[]), &small_config(), &mut rng).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);

        let bad = small_config().with_elite_count(100);
        let err = solve_genetic(&jobs(&[1.0, 2.0]), &bad, &mut rng).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_sequencer_impl() {
        let solver = GeneticSolver::seeded(small_config(), 1);
        assert_eq!(solver.name(), "Genetic Algorithm");
        assert_eq!(solver.complexity(4).operations, 40 * 30 * 4);
        assert_eq!(solver.space_estimate(4, 8), 30 * 4 * 8);
    }
}
