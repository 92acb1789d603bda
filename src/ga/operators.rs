//! Permutation-preserving genetic operators for tours.
//!
//! # Crossover
//!
//! - [`order_crossover`]: copies a contiguous segment from one parent and
//!   fills the rest in the other parent's relative order
//! - [`crossover_pair`]: draws one segment and builds the two complementary
//!   children
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-position swap with a uniformly random position
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use super::error::GaError;
use super::types::{point_counts, Tour};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order-preserving crossover over the half-open segment `[start, end)`.
///
/// # Algorithm
///
/// 1. Copy `segment_parent[start..end]` into the child at the same positions
/// 2. Scan `other_parent` from first to last; skip each point that the
///    segment already holds, place every other point into the next free
///    child position (positions `0..start`, then `end..n`)
///
/// Points match by coordinate value. A coordinate that occurs several times
/// is skipped only as often as it occurs in the segment, so repeated points
/// survive too.
///
/// An empty segment (`start == end`) returns `other_parent`'s order.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Errors
///
/// - [`GaError::LengthMismatch`] if the parents differ in length
/// - [`GaError::InvalidSegment`] if `start > end` or `end > n`
/// - [`GaError::ParentMismatch`] if the parents are not permutations of the
///   same points
pub fn order_crossover(
    segment_parent: &Tour,
    other_parent: &Tour,
    start: usize,
    end: usize,
) -> Result<Tour, GaError> {
    let n = segment_parent.len();
    if other_parent.len() != n {
        return Err(GaError::LengthMismatch {
            expected: n,
            actual: other_parent.len(),
        });
    }
    if start > end || end > n {
        return Err(GaError::InvalidSegment {
            start,
            end,
            len: n,
        });
    }

    if point_counts(segment_parent.points()) != point_counts(other_parent.points()) {
        return Err(GaError::ParentMismatch);
    }

    let segment = &segment_parent.points()[start..end];
    let mut pending = point_counts(segment);

    // Step 1: the segment parent's order seeds every slot; slots outside
    // the segment are overwritten below.
    let mut child = segment_parent.points().to_vec();
    let mut free = (0..start).chain(end..n);

    // Step 2: fill from the other parent in its own order
    for &p in other_parent.points() {
        if let Some(count) = pending.get_mut(&p.key()) {
            if *count > 0 {
                *count -= 1;
                continue;
            }
        }
        match free.next() {
            Some(pos) => child[pos] = p,
            None => return Err(GaError::ParentMismatch),
        }
    }

    Ok(Tour::new(child))
}

/// Builds two complementary children from one random segment.
///
/// The segment bounds are drawn independently, one bounded by each parent's
/// length, then ordered. `first` takes the segment from `mom` and the rest
/// from `dad`; `second` swaps the roles over the same range.
pub fn crossover_pair<R: Rng>(
    mom: &Tour,
    dad: &Tour,
    rng: &mut R,
) -> Result<(Tour, Tour), GaError> {
    let (start, end) = random_segment(mom.len(), dad.len(), rng);
    tracing::trace!(start, end, "crossover segment");

    let first = order_crossover(mom, dad, start, end)?;
    let second = order_crossover(dad, mom, start, end)?;
    Ok((first, second))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation applied independently at every position.
///
/// For each `i`, with probability `p_mutate`, swaps `genes[i]` with
/// `genes[j]` for a uniform `j`. Drawing `j == i` leaves that position as is.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<T, R: Rng>(genes: &mut [T], p_mutate: f64, rng: &mut R) {
    let n = genes.len();
    for i in 0..n {
        if rng.random::<f64>() < p_mutate {
            let j = rng.random_range(0..n);
            genes.swap(i, j);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Picks a segment `[start, end)` with `start <= end`.
///
/// One bound is drawn from `0..len_a`, the other from `0..len_b`. Returns
/// `(0, 0)` if either length is zero.
pub fn random_segment<R: Rng>(len_a: usize, len_b: usize, rng: &mut R) -> (usize, usize) {
    if len_a == 0 || len_b == 0 {
        return (0, 0);
    }
    let a = rng.random_range(0..len_a);
    let b = rng.random_range(0..len_b);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Point;
    use crate::random::create_rng;

    fn line(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64, (i * i) as f64)).collect()
    }

    fn tour_of(reference: &[Point], order: &[usize]) -> Tour {
        Tour::new(order.iter().map(|&i| reference[i]).collect())
    }

    // ---- Order crossover ----

    #[test]
    fn test_ox_known_child() {
        let r = line(8);
        let a = tour_of(&r, &[0, 1, 2, 3, 4, 5, 6, 7]);
        let b = tour_of(&r, &[7, 6, 5, 4, 3, 2, 1, 0]);

        let child = order_crossover(&a, &b, 2, 5).unwrap();
        // segment 2,3,4 kept in place; 7,6,5,1,0 fill 0,1 then 5,6,7
        assert_eq!(child, tour_of(&r, &[7, 6, 2, 3, 4, 5, 1, 0]));
    }

    #[test]
    fn test_ox_empty_segment_returns_other_parent() {
        let r = line(6);
        let a = tour_of(&r, &[0, 1, 2, 3, 4, 5]);
        let b = tour_of(&r, &[3, 5, 1, 0, 4, 2]);

        assert_eq!(order_crossover(&a, &b, 1, 1).unwrap(), b);
        assert_eq!(order_crossover(&a, &b, 0, 0).unwrap(), b);
    }

    #[test]
    fn test_ox_full_segment_returns_segment_parent() {
        let r = line(5);
        let a = tour_of(&r, &[4, 2, 0, 1, 3]);
        let b = tour_of(&r, &[0, 1, 2, 3, 4]);
        assert_eq!(order_crossover(&a, &b, 0, 5).unwrap(), a);
    }

    #[test]
    fn test_ox_matches_by_value() {
        // Same coordinates, separately constructed
        let a = Tour::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        let b = Tour::new(vec![
            Point::new(2.0, 0.0),
            Point::new(-0.0, 0.0),
            Point::new(1.0, 0.0),
        ]);
        let child = order_crossover(&a, &b, 0, 1).unwrap();
        assert_eq!(child.points()[0], Point::new(0.0, 0.0));
        assert!(child.is_permutation_of(a.points()));
    }

    #[test]
    fn test_ox_repeated_points() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 1.0);
        let s = Point::new(2.0, 0.0);
        let a = Tour::new(vec![p, q, p, s]);
        let b = Tour::new(vec![s, p, p, q]);

        let child = order_crossover(&a, &b, 0, 1).unwrap();
        assert_eq!(child.points(), &[p, s, p, q]);
        assert!(child.is_permutation_of(a.points()));
    }

    #[test]
    fn test_ox_rejects_bad_input() {
        let r = line(4);
        let a = tour_of(&r, &[0, 1, 2, 3]);
        let short = tour_of(&r, &[0, 1, 2]);

        assert_eq!(
            order_crossover(&a, &short, 0, 1),
            Err(GaError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            order_crossover(&a, &a, 3, 2),
            Err(GaError::InvalidSegment {
                start: 3,
                end: 2,
                len: 4
            })
        );
        assert!(order_crossover(&a, &a, 0, 5).is_err());

        let foreign = Tour::new(vec![r[0], r[1], r[2], Point::new(99.0, 99.0)]);
        assert_eq!(
            order_crossover(&a, &foreign, 3, 4),
            Err(GaError::ParentMismatch)
        );
    }

    #[test]
    fn test_ox_rejects_foreign_point_with_short_segment() {
        let a = Tour::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        let b = Tour::new(vec![Point::new(0.0, 0.0), Point::new(9.0, 9.0)]);

        assert_eq!(order_crossover(&a, &b, 1, 1), Err(GaError::ParentMismatch));
        assert_eq!(order_crossover(&a, &b, 0, 1), Err(GaError::ParentMismatch));
        assert_eq!(order_crossover(&b, &a, 1, 1), Err(GaError::ParentMismatch));
    }

    #[test]
    fn test_crossover_pair_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let r = line(10);
        let a = Tour::new(r.clone());
        let b = a.reversed();

        for _ in 0..100 {
            let (c1, c2) = crossover_pair(&a, &b, &mut rng).unwrap();
            assert!(c1.is_permutation_of(&r), "child1 not valid: {c1:?}");
            assert!(c2.is_permutation_of(&r), "child2 not valid: {c2:?}");
        }
    }

    #[test]
    fn test_crossover_pair_identical_parents() {
        let mut rng = create_rng(3);
        let a = Tour::new(line(7));
        let (c1, c2) = crossover_pair(&a, &a, &mut rng).unwrap();
        assert_eq!(c1, a);
        assert_eq!(c2, a);
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_mutation_preserves_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            swap_mutation(&mut perm, 0.5, &mut rng);
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_swap_mutation_zero_rate() {
        let mut rng = create_rng(42);
        let mut perm: Vec<usize> = (0..10).collect();
        swap_mutation(&mut perm, 0.0, &mut rng);
        assert_eq!(perm, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_swap_mutation_changes_something_at_full_rate() {
        let mut rng = create_rng(42);
        let original: Vec<usize> = (0..10).collect();
        let mut perm = original.clone();
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert_ne!(perm, original);
    }

    #[test]
    fn test_swap_mutation_tiny_inputs() {
        let mut rng = create_rng(42);
        let mut empty: Vec<usize> = vec![];
        swap_mutation(&mut empty, 1.0, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![0];
        swap_mutation(&mut one, 1.0, &mut rng);
        assert_eq!(one, vec![0]);
    }

    // ---- Random segment helper ----

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, 10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
        assert_eq!(random_segment(0, 5, &mut rng), (0, 0));
    }
}
