//! Tour evaluation shared by both engines.
//!
//! - [`tour_length`]: closed-tour length under a [`DistanceMatrix`](crate::distance::DistanceMatrix)
//! - [`is_permutation`] / [`validate_tour`]: permutation checks

mod evaluator;

pub use evaluator::{is_permutation, tour_length, validate_tour, Tour};
