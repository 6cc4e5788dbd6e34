//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use rand::seq::index;
use rand::Rng;

/// Number of contestants drawn for each tournament.
pub const TOURNAMENT_SIZE: usize = 5;

/// Tournament selection over tour lengths (lower is better).
///
/// Draws `min(k, n)` distinct members without replacement and returns the
/// index of the shortest. Among equal lengths the contestant drawn first
/// wins. Successive calls are independent, so two parents picked this way
/// may be the same individual.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `lengths` is empty.
///
/// ```
/// use u_tour::ga::selection::tournament;
/// use u_tour::random::create_rng;
///
/// let mut rng = create_rng(1);
/// // a tournament over the whole population always returns the best
/// assert_eq!(tournament(&[9.0, 4.0, 7.0], 3, &mut rng), 1);
/// ```
pub fn tournament<R: Rng + ?Sized>(lengths: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!lengths.is_empty(), "cannot select from empty population");

    let n = lengths.len();
    let amount = k.clamp(1, n);

    let mut contestants = index::sample(rng, n, amount).into_iter();
    let mut best = contestants
        .next()
        .unwrap_or_else(|| unreachable!("at least one contestant is drawn"));
    for idx in contestants {
        if lengths[idx] < lengths[best] {
            best = idx;
        }
    }
    best
}
