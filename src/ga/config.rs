//! GA configuration.
//!
//! [`GaConfig`] holds the parameters of a population and the stop policy
//! used by [`GaRunner`](super::GaRunner).

use super::error::GaError;

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in every generation.
    ///
    /// Odd sizes are allowed: the surplus child of the last pair is dropped.
    pub population_size: usize,

    /// Probability of recombining a selected pair (0.0–1.0).
    ///
    /// When crossover is not applied, both parents pass through unchanged
    /// (before mutation).
    pub crossover_rate: f64,

    /// Per-position swap probability during mutation (0.0–1.0).
    ///
    /// Applied independently to every position of every child, so the
    /// expected number of swaps per child is `mutation_rate * n`.
    pub mutation_rate: f64,

    /// Generation cap for [`GaRunner`](super::GaRunner).
    pub max_generations: usize,

    /// Number of generations without a new best tour before the runner stops.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            max_generations: 500,
            stagnation_limit: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-position mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, including the runner's stop policy.
    ///
    /// Rates outside `[0, 1]` are tolerated (they behave like the nearest
    /// bound), but NaN is rejected because every comparison against it fails.
    pub fn validate(&self) -> Result<(), GaError> {
        self.validate_population()?;
        if self.max_generations == 0 {
            return Err(GaError::invalid_config(
                "max_generations must be at least 1",
            ));
        }
        Ok(())
    }

    /// Validates only the fields a [`Population`](super::Population) reads:
    /// size and rates.
    pub fn validate_population(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::invalid_config(
                "population_size must be at least 1",
            ));
        }
        if self.crossover_rate.is_nan() {
            return Err(GaError::invalid_config("crossover_rate must be a number"));
        }
        if self.mutation_rate.is_nan() {
            return Err(GaError::invalid_config("mutation_rate must be a number"));
        }
        Ok(())
    }
}
