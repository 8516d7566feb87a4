//! Annealing parameters.

use serde::{Deserialize, Serialize};

use crate::error::{SequencingError, SequencingResult};

/// Parameters of the simulated annealing sequencer.
///
/// # Example
/// ```
/// use u_sequencing::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_cooling_rate(0.99)
///     .with_max_iterations(5_000);
/// assert!(config.validate().is_ok());
/// assert!(config.with_cooling_rate(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    /// Starting temperature (> 0).
    pub initial_temperature: f64,
    /// Geometric cooling factor applied after every iteration, in (0, 1).
    pub cooling_rate: f64,
    /// Number of neighbour proposals.
    pub max_iterations: u64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            max_iterations: 1000,
        }
    }
}

impl AnnealingConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Sets the cooling factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, iterations: u64) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> SequencingResult<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(SequencingError::invalid_parameter(
                "initial_temperature",
                format!("must be finite and > 0, got {}", self.initial_temperature),
            ));
        }
        // Negated comparison also rejects NaN
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SequencingError::invalid_parameter(
                "cooling_rate",
                format!("must be in (0, 1), got {}", self.cooling_rate),
            ));
        }
        Ok(())
    }
}
