//! Fitness-proportionate parent selection.
//!
//! Fitness here is a tour's reciprocal length, so larger is better and the
//! raw values can be used as roulette weights directly.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use super::error::GaError;
use rand::Rng;

/// Roulette wheel selection over a fitness vector.
///
/// Draws `roll` uniformly in `[0, sum)` and walks the vector, accumulating
/// fitness until the running total exceeds `roll`. Returns that index.
///
/// # Complexity
/// O(n) per selection
///
/// # Errors
///
/// [`GaError::SelectionUnderflow`] if the fitness sum is zero, negative or
/// not finite (including an empty slice).
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::roulette;
/// use tsp_ga::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let idx = roulette(&[0.0, 2.5, 0.0], &mut rng).unwrap();
/// assert_eq!(idx, 1);
/// ```
pub fn roulette<R: Rng>(fitnesses: &[f64], rng: &mut R) -> Result<usize, GaError> {
    let total: f64 = fitnesses.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Err(GaError::SelectionUnderflow { total });
    }

    let roll = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &f) in fitnesses.iter().enumerate() {
        cumulative += f;
        if cumulative > roll {
            return Ok(i);
        }
    }

    Ok(fitnesses.len() - 1) // floating-point fallback
}
