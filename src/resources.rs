//! Static memory estimates for each solver.
//!
//! These are documented approximations for reporting, not measurements.
//! The caller supplies the bytes per job explicitly; solvers never consult
//! them.
//!
//! | Solver | Estimate | Rationale |
//! |--------|----------|-----------|
//! | Exhaustive | n! · s | every ordering materialized |
//! | Annealing | n · s | one schedule-sized buffer per live copy |
//! | Genetic | p · n · s | one schedule per individual |
//!
//! All values saturate at `u128::MAX` (exact up to n = 34).

/// Default bytes per job: one `f64` processing time.
pub const DEFAULT_ELEMENT_SIZE: usize = std::mem::size_of::<f64>();

/// n!, saturating at `u128::MAX`.
///
/// ```
/// use u_sequencing::resources::factorial;
///
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(4), 24);
/// ```
pub fn factorial(n: usize) -> u128 {
    let mut acc: u128 = 1;
    for k in 2..=n as u128 {
        match acc.checked_mul(k) {
            Some(v) => acc = v,
            None => return u128::MAX,
        }
    }
    acc
}

/// Estimated bytes for exhaustive search over `n` jobs: `n! × element_size`.
pub fn estimate_exact_space(n: usize, element_size: usize) -> u128 {
    factorial(n).saturating_mul(element_size as u128)
}

/// Estimated bytes for simulated annealing over `n` jobs: `n × element_size`.
pub fn estimate_annealing_space(n: usize, element_size: usize) -> u128 {
    (n as u128).saturating_mul(element_size as u128)
}

/// Estimated bytes for a genetic search: `population × n × element_size`.
pub fn estimate_genetic_space(n: usize, population: usize, element_size: usize) -> u128 {
    (population as u128)
        .saturating_mul(n as u128)
        .saturating_mul(element_size as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(11), 39_916_800);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_saturates() {
        assert_ne!(factorial(34), u128::MAX);
        assert_eq!(factorial(35), u128::MAX);
        assert_eq!(factorial(100), u128::MAX);
    }

    #[test]
    fn test_exact_space_is_factorial_times_size() {
        for n in 0..=20 {
            for s in [1, 4, 8, 28] {
                assert_eq!(estimate_exact_space(n, s), factorial(n) * s as u128);
            }
        }
        assert_eq!(estimate_exact_space(4, 28), 672);
    }

    #[test]
    fn test_annealing_space() {
        assert_eq!(estimate_annealing_space(4, 28), 112);
        assert_eq!(estimate_annealing_space(0, 8), 0);
    }

    #[test]
    fn test_genetic_space() {
        assert_eq!(estimate_genetic_space(4, 100, 8), 3200);
    }

    #[test]
    fn test_default_element_size() {
        assert_eq!(DEFAULT_ELEMENT_SIZE, 8);
    }
}
