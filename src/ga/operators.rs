//! Permutation-preserving genetic operators for tours.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985), copies a slice of parent1 and
//!   fills the rest in parent2's relative order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct random positions
//! - [`mutate`]: apply [`swap_mutation`] with a given probability
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::error::{TourError, TourResult};
use crate::evaluation::Tour;
use crate::random::distinct_pair;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) with random cut points.
///
/// Picks two distinct cut indices in `0..n`, orders them as `start < end`,
/// and delegates to [`order_crossover_with_cuts`].
///
/// # Errors
/// [`TourError::InvalidInput`] if the parents differ in length or have
/// fewer than two cities.
pub fn order_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> TourResult<Tour> {
    check_parents(parent1, parent2)?;
    let (start, end) = random_cuts(parent1.len(), rng);
    Ok(ox_child(parent1, parent2, start, end))
}

/// Order Crossover (OX) with explicit cut points.
///
/// # Algorithm
///
/// 1. Copy `parent1[start..end]` into the child at the same positions
/// 2. Fill the remaining positions left to right with the cities of
///    `parent2`, in `parent2`'s order, skipping cities already placed
///
/// The child is a valid permutation whenever both parents are.
///
/// ```
/// use u_tour::ga::operators::order_crossover_with_cuts;
///
/// let child = order_crossover_with_cuts(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 3)?;
/// assert_eq!(child, vec![4, 1, 2, 3, 0]);
/// # Ok::<(), u_tour::TourError>(())
/// ```
///
/// # Errors
/// [`TourError::InvalidInput`] if the parents differ in length, have fewer
/// than two cities, or `start < end <= n` does not hold.
pub fn order_crossover_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> TourResult<Tour> {
    check_parents(parent1, parent2)?;
    let n = parent1.len();
    if !(start < end && end <= n) {
        return Err(TourError::invalid_input(format!(
            "crossover cuts must satisfy start < end <= {n}, got ({start}, {end})"
        )));
    }
    Ok(ox_child(parent1, parent2, start, end))
}

/// Builds one OX child. Inputs are already validated.
pub(crate) fn ox_child(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Tour {
    let n = parent1.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    // Step 1: copy the slice from parent1
    for i in start..end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    // Step 2: fill the gaps left to right in parent2's order
    let mut donor = parent2.iter().copied().filter(|&city| !placed[city]);
    for slot in child.iter_mut().filter(|slot| **slot == usize::MAX) {
        if let Some(city) = donor.next() {
            *slot = city;
        }
    }

    child
}

/// Two distinct cut indices in `0..n`, ordered as `start < end`.
pub(crate) fn random_cuts<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let (a, b) = distinct_pair(n, rng);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

fn check_parents(parent1: &[usize], parent2: &[usize]) -> TourResult<()> {
    if parent1.len() != parent2.len() {
        return Err(TourError::invalid_input(format!(
            "parents must have equal length, got {} and {}",
            parent1.len(),
            parent2.len()
        )));
    }
    if parent1.len() < 2 {
        return Err(TourError::invalid_input(
            "crossover needs at least two cities",
        ));
    }
    Ok(())
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// Tours with fewer than two cities are left unchanged.
pub fn swap_mutation<R: Rng + ?Sized>(tour: &mut [usize], rng: &mut R) {
    if tour.len() < 2 {
        return;
    }
    let (i, j) = distinct_pair(tour.len(), rng);
    tour.swap(i, j);
}

/// Applies [`swap_mutation`] with probability `rate`.
///
/// Returns `true` if the tour was mutated.
pub fn mutate<R: Rng + ?Sized>(tour: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random::<f64>() < rate {
        swap_mutation(tour, rng);
        true
    } else {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
