//! Error types shared by the distance, evaluation and engine modules.
//!
//! All validation happens eagerly when a matrix or an engine is built, so
//! the `run` loops themselves never fail.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type TourResult<T> = std::result::Result<T, TourError>;

/// Errors raised while building matrices, engines, or operator inputs.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::TourError;
///
/// let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0]]).unwrap_err();
/// assert!(matches!(err, TourError::InvalidInput(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    /// The problem data is unusable: bad matrix shape, negative distances,
    /// too few cities, or a population smaller than the tournament.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A hyperparameter is out of its allowed range.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl TourError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        TourError::InvalidInput(msg.into())
    }

    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        TourError::Configuration(msg.into())
    }
}
