//! Random-number plumbing shared by both engines.
//!
//! Engines never reach for a global generator: the caller passes an
//! `R: Rng` into the constructor. [`create_rng`] is the reproducible
//! default used by the `seeded` constructors, tests and benchmarks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
///
/// ```
/// use rand::Rng;
/// use u_tour::random::create_rng;
///
/// let a: u64 = create_rng(7).random();
/// let b: u64 = create_rng(7).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Picks two distinct indices uniformly from `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two indices to pick a distinct pair");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Samples an index with probability proportional to `weights[i]`.
///
/// Returns `None` when the total mass is zero or not finite, so callers can
/// apply their own fallback. Zero-weight entries are never returned.
pub fn sample_weighted<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }

    let threshold = rng.random::<f64>();
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w / total;
        last_positive = Some(i);
        if cumulative > threshold {
            return Some(i);
        }
    }

    // rounding left the cumulative sum just below the threshold
    last_positive
}
