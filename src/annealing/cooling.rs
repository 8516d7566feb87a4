//! Temperature schedule.

/// Temperatures at or below this are treated as zero: non-improving moves
/// are rejected outright.
pub const MIN_TEMPERATURE: f64 = 1e-12;

/// Geometric cooling: after k steps the temperature is `t0 · rate^k`.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialCooling {
    temperature: f64,
    rate: f64,
}

impl ExponentialCooling {
    /// Starts at `initial` and multiplies by `rate` on every [`cool`](Self::cool).
    pub fn new(initial: f64, rate: f64) -> Self {
        Self {
            temperature: initial,
            rate,
        }
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Advances one step.
    pub fn cool(&mut self) {
        self.temperature *= self.rate;
    }

    /// Metropolis acceptance probability of a move changing cost by `delta`.
    ///
    /// Improving moves (`delta < 0`) are always accepted. Near-zero
    /// temperature accepts nothing else.
    pub fn acceptance_probability(&self, delta: f64) -> f64 {
        if delta < 0.0 {
            return 1.0;
        }
        if self.temperature <= MIN_TEMPERATURE {
            return 0.0;
        }
        (-delta / self.temperature).exp()
    }
}
