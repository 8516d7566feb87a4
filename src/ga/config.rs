//! Genetic search parameters.

use serde::{Deserialize, Serialize};

use crate::error::{SequencingError, SequencingResult};

/// Parameters of the genetic sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations.
    pub generations: u64,
    /// Probability of mutating each child, in [0, 1].
    pub mutation_rate: f64,
    /// Best individuals copied unchanged into the next generation.
    pub elite_count: usize,
    /// Parents are drawn from this many best individuals.
    pub parent_pool: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.1,
            elite_count: 10,
            parent_pool: 50,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: u64) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite size.
    pub fn with_elite_count(mut self, count: usize) -> Self {
        self.elite_count = count;
        self
    }

    /// Sets the parent pool size.
    pub fn with_parent_pool(mut self, pool: usize) -> Self {
        self.parent_pool = pool;
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> SequencingResult<()> {
        if self.population_size == 0 {
            return Err(SequencingError::invalid_parameter(
                "population_size",
                "must be at least 1",
            ));
        }
        if self.elite_count > self.population_size {
            return Err(SequencingError::invalid_parameter(
                "elite_count",
                format!(
                    "{} exceeds population size {}",
                    self.elite_count, self.population_size
                ),
            ));
        }
        if self.parent_pool == 0 {
            return Err(SequencingError::invalid_parameter(
                "parent_pool",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SequencingError::invalid_parameter(
                "mutation_rate",
                format!("must be in [0, 1], got {}", self.mutation_rate),
            ));
        }
        Ok(())
    }
}
