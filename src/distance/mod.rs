//! Distance matrix input.

mod matrix;

pub use matrix::DistanceMatrix;
