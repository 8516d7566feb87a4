//! Permutation chromosome for sequencing.
//!
//! # Encoding
//!
//! A chromosome is a permutation of job *positions* (`order[k]` = index of
//! the k-th job to run). Encoding positions rather than processing times
//! keeps repeated values distinct, so crossover never drops or duplicates
//! a job.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 5 (order-based representations)

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cost::total_completion_time;
use crate::error::SequencingResult;
use crate::models::{JobSet, Schedule};

/// Job-order chromosome.
///
/// Lower fitness = better schedule (minimization convention).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SequenceChromosome {
    /// Job positions in execution order.
    pub(crate) order: Vec<usize>,
    /// Fitness value (total completion time; lower = better).
    pub(crate) fitness: f64,
}

impl SequenceChromosome {
    /// Chromosome running jobs in input order.
    pub(crate) fn identity(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
            fitness: f64::INFINITY,
        }
    }

    /// Creates a uniformly random chromosome.
    pub(crate) fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut chromosome = Self::identity(len);
        chromosome.order.shuffle(rng);
        chromosome
    }

    /// Decodes into a schedule of `jobs`.
    pub(crate) fn decode(&self, jobs: &JobSet) -> SequencingResult<Schedule> {
        Schedule::from_order(jobs, &self.order)
    }

    /// Computes and stores the fitness against `jobs`.
    ///
    /// The operators in this module only ever produce permutations of
    /// `0..jobs.len()`.
    pub(crate) fn evaluate(&mut self, jobs: &JobSet) -> f64 {
        debug_assert!(self.is_valid(jobs.len()));
        let times = jobs.as_slice();
        let sequence: Vec<f64> = self.order.iter().map(|&idx| times[idx]).collect();
        self.fitness = total_completion_time(&sequence);
        self.fitness
    }

    /// Whether `order` is a permutation of `0..len`.
    pub(crate) fn is_valid(&self, len: usize) -> bool {
        if self.order.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        for &idx in &self.order {
            if idx >= len || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

// ======================== Crossover operators ========================

/// One-point order crossover.
///
/// Copies a random non-empty proper prefix of parent 1, then appends the
/// remaining positions in the order they appear in parent 2.
pub(crate) fn one_point_crossover<R: Rng + ?Sized>(
    p1: &SequenceChromosome,
    p2: &SequenceChromosome,
    rng: &mut R,
) -> SequenceChromosome {
    let len = p1.order.len();
    if len < 2 {
        return reset(p1.clone());
    }
    let cut = rng.random_range(1..len);

    let mut taken = vec![false; len];
    let mut order = Vec::with_capacity(len);
    for &idx in &p1.order[..cut] {
        taken[idx] = true;
        order.push(idx);
    }
    order.extend(p2.order.iter().copied().filter(|&idx| !taken[idx]));

    SequenceChromosome {
        order,
        fitness: f64::INFINITY,
    }
}

// ======================== Mutation operators ========================

/// Swap mutation: exchanges two distinct random positions.
pub(crate) fn swap_mutation<R: Rng + ?Sized>(chromosome: &mut SequenceChromosome, rng: &mut R) {
    let len = chromosome.order.len();
    if len < 2 {
        return;
    }
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    chromosome.order.swap(i, j);
}
