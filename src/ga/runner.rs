//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a [`Population`] generation by generation and applies
//! the stop policy: generation cap, stagnation, or external cancellation.

use super::config::GaConfig;
use super::error::GaError;
use super::population::Population;
use super::types::{Point, Tour};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Snapshot handed to observers after every generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number (0 is the initial shuffle).
    pub generation: usize,

    /// Fitness of the fittest tour in this generation.
    pub best_fitness: f64,

    /// Mean fitness across the generation.
    pub mean_fitness: f64,

    /// Length of the fittest tour in this generation.
    pub best_length: f64,
}

impl GenerationStats {
    fn of<R: Rng>(population: &Population<R>) -> Self {
        Self {
            generation: population.generation(),
            best_fitness: population.fittest_fitness(),
            mean_fitness: population.mean_fitness(),
            best_length: population.fittest().length(),
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The shortest tour seen in any generation.
    pub best: Tour,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations advanced.
    pub generations: usize,

    /// Whether the run stopped on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Fittest fitness of each generation, starting with generation 0.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{GaConfig, GaRunner, Point};
///
/// let points: Vec<Point> = (0..6)
///     .map(|i| {
///         let a = i as f64 * std::f64::consts::TAU / 6.0;
///         Point::new(a.cos(), a.sin())
///     })
///     .collect();
/// let config = GaConfig::default().with_max_generations(50).with_seed(42);
/// let result = GaRunner::run(&points, &config).unwrap();
/// assert_eq!(result.fitness_history.len(), 51);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on `points`.
    pub fn run(points: &[Point], config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with_cancel(points, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best tour found so far.
    pub fn run_with_cancel(
        points: &[Point],
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError> {
        Self::run_with_observer(points, config, cancel, |_| {})
    }

    /// Runs the GA, reporting [`GenerationStats`] for generation 0 and after
    /// every advance.
    pub fn run_with_observer<F>(
        points: &[Point],
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: F,
    ) -> Result<GaResult, GaError>
    where
        F: FnMut(&GenerationStats),
    {
        let mut population = Population::new(points, config)?;
        Self::evolve(&mut population, config, cancel, observer)
    }

    /// Advances an existing population under the stop policy of `config`.
    ///
    /// Only `max_generations` and `stagnation_limit` are read from `config`;
    /// the population keeps its own size and rates.
    pub fn evolve<R, F>(
        population: &mut Population<R>,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<GaResult, GaError>
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;
        tracing::info!(
            size = population.size(),
            points = population.reference().len(),
            max_generations = config.max_generations,
            "starting evolution"
        );

        let initial = GenerationStats::of(population);
        observer(&initial);

        let mut best = population.fittest().clone();
        let mut best_fitness = initial.best_fitness;
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best_fitness);

        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut generations = 0usize;

        while generations < config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population.advance_generation()?;
            generations += 1;

            let stats = GenerationStats::of(population);
            fitness_history.push(stats.best_fitness);

            if stats.best_fitness > best_fitness {
                best = population.fittest().clone();
                best_fitness = stats.best_fitness;
                stagnation_counter = 0;
                tracing::debug!(
                    generation = stats.generation,
                    length = stats.best_length,
                    "new best tour"
                );
            } else {
                stagnation_counter += 1;
            }

            observer(&stats);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        tracing::info!(
            generations,
            best_length = best.length(),
            stagnated,
            cancelled,
            "evolution finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations,
            stagnated,
            cancelled,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
