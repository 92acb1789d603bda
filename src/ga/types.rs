//! Core data types for the TSP genetic algorithm.
//!
//! A [`Tour`] is a permutation of a fixed reference set of [`Point`]s,
//! read as a closed loop: after the last point the salesman returns to the
//! first. Tours are never modified in place; every operator returns a new
//! tour.

use super::error::GaError;
use super::operators::swap_mutation;
use rand::Rng;
use std::collections::HashMap;

/// A location in the plane.
///
/// Equality is by coordinate value. Two points built separately from the same
/// coordinates are the same city.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Hashable identity by coordinate value.
    ///
    /// `-0.0` and `0.0` compare equal as `f64`, so both map to the same key.
    pub(crate) fn key(&self) -> (u64, u64) {
        fn canonical_bits(v: f64) -> u64 {
            if v == 0.0 {
                0.0f64.to_bits()
            } else {
                v.to_bits()
            }
        }
        (canonical_bits(self.x), canonical_bits(self.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Counts occurrences of each point by coordinate value.
pub(crate) fn point_counts<'a, I>(points: I) -> HashMap<(u64, u64), usize>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut counts = HashMap::new();
    for p in points {
        *counts.entry(p.key()).or_insert(0) += 1;
    }
    counts
}

/// One candidate solution: an ordered, closed visiting sequence.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::{Point, Tour};
///
/// let square = Tour::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ]);
/// assert_eq!(square.length(), 4.0);
/// assert_eq!(square.fitness().unwrap(), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    points: Vec<Point>,
}

impl Tour {
    /// Wraps a visiting order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The points in visiting order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the tour and returns its visiting order.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points visited.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the tour visits no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges in visiting order, ending with the edge from the last point
    /// back to the first.
    ///
    /// Empty for tours with fewer than two points. This is what a renderer
    /// draws.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        let n = if self.points.len() < 2 {
            0
        } else {
            self.points.len()
        };
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .take(n)
    }

    /// Total closed-loop Euclidean length.
    pub fn length(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }

    /// Reciprocal of [`length`](Self::length). Higher is better.
    ///
    /// # Errors
    ///
    /// [`GaError::DegenerateFitness`] when the reciprocal is not a finite
    /// positive number: fewer than two points, all points coincide, or the
    /// length is so small (subnormal) that `1 / length` overflows.
    pub fn fitness(&self) -> Result<f64, GaError> {
        let length = self.length();
        let fitness = 1.0 / length;
        if length > 0.0 && fitness.is_finite() {
            Ok(fitness)
        } else {
            Err(GaError::DegenerateFitness { length })
        }
    }

    /// Returns a copy where each position, with independent probability
    /// `p_mutate`, is swapped with a uniformly random position.
    ///
    /// A draw that picks the position itself is a no-op for that position
    /// only; the pass continues. The receiver is left untouched.
    pub fn mutate<R: Rng>(&self, p_mutate: f64, rng: &mut R) -> Tour {
        let mut points = self.points.clone();
        swap_mutation(&mut points, p_mutate, rng);
        Tour { points }
    }

    /// The same loop travelled in the opposite direction.
    pub fn reversed(&self) -> Tour {
        let mut points = self.points.clone();
        points.reverse();
        Tour { points }
    }

    /// Returns `true` if this tour contains exactly the points of
    /// `reference`, each as many times as it occurs there.
    pub fn is_permutation_of(&self, reference: &[Point]) -> bool {
        self.points.len() == reference.len()
            && point_counts(&self.points) == point_counts(reference)
    }
}

impl From<Vec<Point>> for Tour {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
