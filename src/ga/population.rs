//! One generation of tours and the step to the next.
//!
//! [`Population`] owns the current tours, their cached fitness values and the
//! random source. [`Population::advance_generation`] runs the classic loop:
//! roulette selection → crossover → mutation, in pairs, until the next
//! generation is full.

use super::config::GaConfig;
use super::error::GaError;
use super::operators::crossover_pair;
use super::selection::roulette;
use super::types::{Point, Tour};
use crate::random::{create_rng, entropy_rng};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::instrument;

/// Creates `size` independent uniform shuffles of `reference`.
///
/// Every returned tour holds exactly the points of `reference`.
pub fn generate<R: Rng>(size: usize, reference: &[Point], rng: &mut R) -> Vec<Tour> {
    (0..size)
        .map(|_| {
            let mut points = reference.to_vec();
            points.shuffle(rng);
            Tour::new(points)
        })
        .collect()
}

/// Checks that `reference` can produce tours with a defined fitness.
fn validate_reference(reference: &[Point]) -> Result<(), GaError> {
    if reference.len() < 2 {
        return Err(GaError::InvalidReferenceSet {
            len: reference.len(),
        });
    }
    if let Some(index) = reference.iter().position(|p| !p.is_finite()) {
        return Err(GaError::NonFiniteCoordinate { index });
    }
    // Any order has zero length exactly when all points coincide
    let first = reference[0];
    if reference.iter().all(|p| *p == first) {
        return Err(GaError::DegenerateFitness { length: 0.0 });
    }
    Ok(())
}

fn evaluate(tours: &[Tour]) -> Result<Vec<f64>, GaError> {
    tours.iter().map(Tour::fitness).collect()
}

/// A generation of tours over one reference point set.
///
/// `fitnesses()[i]` is always `tours()[i].fitness()`: both are replaced
/// together at the end of [`advance_generation`](Self::advance_generation),
/// and a failed step leaves the previous generation in place.
///
/// The random source is a type parameter so tests and callers can inject
/// their own; [`Population::new`] uses a seeded [`StdRng`].
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::{GaConfig, Point, Population};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let config = GaConfig::default().with_population_size(9).with_seed(42);
/// let mut population = Population::new(&points, &config).unwrap();
///
/// for _ in 0..10 {
///     population.advance_generation().unwrap();
/// }
/// assert_eq!(population.generation(), 10);
/// assert_eq!(population.tours().len(), 9);
/// assert!(population.fittest().is_permutation_of(&points));
/// ```
#[derive(Debug, Clone)]
pub struct Population<R: Rng = StdRng> {
    reference: Vec<Point>,
    tours: Vec<Tour>,
    fitnesses: Vec<f64>,
    size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    generation: usize,
    rng: R,
}

impl Population<StdRng> {
    /// Shuffles `reference` into a fresh generation of
    /// `config.population_size` tours.
    ///
    /// Uses `config.seed` when set, entropy otherwise.
    ///
    /// # Errors
    ///
    /// - [`GaError::InvalidConfig`] if the size or a rate is invalid (see
    ///   [`GaConfig::validate_population`]; the stop policy is not checked)
    /// - [`GaError::InvalidReferenceSet`] for fewer than two points
    /// - [`GaError::NonFiniteCoordinate`] for NaN or infinite coordinates
    /// - [`GaError::DegenerateFitness`] if all points coincide or the loop
    ///   is too short for `1 / length` to be finite
    pub fn new(reference: &[Point], config: &GaConfig) -> Result<Self, GaError> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::with_rng(reference, config, rng)
    }
}

impl<R: Rng> Population<R> {
    /// Like [`Population::new`], drawing from `rng` instead of a seed.
    #[instrument(
        level = "debug",
        skip_all,
        fields(size = config.population_size, points = reference.len())
    )]
    pub fn with_rng(reference: &[Point], config: &GaConfig, mut rng: R) -> Result<Self, GaError> {
        config.validate_population()?;
        validate_reference(reference)?;

        let tours = generate(config.population_size, reference, &mut rng);
        let fitnesses = evaluate(&tours)?;
        tracing::debug!("initial generation created");

        Ok(Self {
            reference: reference.to_vec(),
            tours,
            fitnesses,
            size: config.population_size,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            generation: 0,
            rng,
        })
    }

    /// Builds generation 0 from explicit tours.
    ///
    /// The population size is `tours.len()`; `config.population_size` is
    /// ignored. The first tour defines the reference set and every other tour
    /// must be a permutation of it.
    ///
    /// # Errors
    ///
    /// The same as [`Population::new`], plus [`GaError::ParentMismatch`] if a
    /// tour visits a different point multiset than the first one.
    pub fn from_tours(tours: Vec<Tour>, config: &GaConfig, rng: R) -> Result<Self, GaError> {
        let size = tours.len();
        config.validate_population()?;

        let reference = tours
            .first()
            .map(|t| t.points().to_vec())
            .ok_or(GaError::InvalidReferenceSet { len: 0 })?;
        validate_reference(&reference)?;
        if !tours.iter().all(|t| t.is_permutation_of(&reference)) {
            return Err(GaError::ParentMismatch);
        }

        let fitnesses = evaluate(&tours)?;
        Ok(Self {
            reference,
            tours,
            fitnesses,
            size,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            generation: 0,
            rng,
        })
    }

    /// The point set every tour permutes.
    pub fn reference(&self) -> &[Point] {
        &self.reference
    }

    /// Tours of the current generation.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Cached fitness of each tour, index-aligned with [`tours`](Self::tours).
    pub fn fitnesses(&self) -> &[f64] {
        &self.fitnesses
    }

    /// Number of tours per generation.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Generations advanced so far; 0 until the first
    /// [`advance_generation`](Self::advance_generation).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Picks one tour by roulette wheel over the current fitnesses.
    ///
    /// # Errors
    ///
    /// [`GaError::SelectionUnderflow`] if the fitness sum is not positive.
    pub fn select(&mut self) -> Result<Tour, GaError> {
        let idx = self.select_index()?;
        Ok(self.tours[idx].clone())
    }

    fn select_index(&mut self) -> Result<usize, GaError> {
        roulette(&self.fitnesses, &mut self.rng)
    }

    /// Recombines two parents over one random segment.
    ///
    /// The first child keeps `mom`'s segment, the second keeps `dad`'s over
    /// the same positions.
    pub fn crossover(&mut self, mom: &Tour, dad: &Tour) -> Result<(Tour, Tour), GaError> {
        crossover_pair(mom, dad, &mut self.rng)
    }

    /// Produces two offspring from the current generation.
    ///
    /// Both parents are chosen independently, so the same tour may be picked
    /// twice. With probability `crossover_rate` they are recombined, otherwise
    /// copied; each result is then mutated on its own.
    pub fn have_two_children(&mut self) -> Result<(Tour, Tour), GaError> {
        let mom = self.select_index()?;
        let dad = self.select_index()?;
        tracing::trace!(mom, dad, "parents selected");

        let (first, second) = if self.rng.random::<f64>() < self.crossover_rate {
            crossover_pair(&self.tours[mom], &self.tours[dad], &mut self.rng)?
        } else {
            (self.tours[mom].clone(), self.tours[dad].clone())
        };

        Ok((
            first.mutate(self.mutation_rate, &mut self.rng),
            second.mutate(self.mutation_rate, &mut self.rng),
        ))
    }

    /// Replaces the current generation with the next one.
    ///
    /// Children are produced in pairs until there are at least `size` of
    /// them; an odd size drops the last child. Tours and fitnesses are
    /// swapped in together, so on error the population is unchanged.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation, size = self.size))]
    pub fn advance_generation(&mut self) -> Result<&mut Self, GaError> {
        let mut next = Vec::with_capacity(self.size + 1);
        while next.len() < self.size {
            let (first, second) = self.have_two_children()?;
            next.push(first);
            next.push(second);
        }
        next.truncate(self.size);

        let fitnesses = evaluate(&next)?;
        self.tours = next;
        self.fitnesses = fitnesses;
        self.generation += 1;

        tracing::debug!(best = self.fittest_fitness(), "generation advanced");
        Ok(self)
    }

    fn fittest_index(&self) -> usize {
        let mut best = 0;
        for (i, &f) in self.fitnesses.iter().enumerate().skip(1) {
            if f > self.fitnesses[best] {
                best = i;
            }
        }
        best
    }

    /// The shortest tour of the current generation.
    ///
    /// On ties the lowest index wins.
    pub fn fittest(&self) -> &Tour {
        &self.tours[self.fittest_index()]
    }

    /// Fitness of [`fittest`](Self::fittest).
    pub fn fittest_fitness(&self) -> f64 {
        self.fitnesses[self.fittest_index()]
    }

    /// Average fitness of the current generation.
    pub fn mean_fitness(&self) -> f64 {
        self.fitnesses.iter().sum::<f64>() / self.fitnesses.len() as f64
    }
}

// ============================================================================
// Tests
// ============================================================================
