//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::TOURNAMENT_SIZE;
use crate::error::{TourError, TourResult};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generation_count, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generation_count(1000)
///     .with_mutation_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population.
    ///
    /// Must be at least the tournament size (5).
    pub population_size: usize,

    /// Number of generations to evolve. Zero returns the best of the
    /// initial random population.
    pub generation_count: usize,

    /// Probability of applying swap mutation to each child (0.0–1.0).
    pub mutation_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generation_count: 500,
            mutation_rate: 0.02,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Out-of-range values are not clamped; [`validate`](Self::validate)
    /// rejects them.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`TourError::Configuration`] for an empty population or a mutation
    ///   rate outside `[0, 1]`
    /// - [`TourError::InvalidInput`] for a population smaller than the
    ///   tournament
    pub fn validate(&self) -> TourResult<()> {
        if self.population_size == 0 {
            return Err(TourError::configuration(
                "population_size must be at least 1",
            ));
        }
        if self.population_size < TOURNAMENT_SIZE {
            return Err(TourError::invalid_input(format!(
                "population_size {} is smaller than the tournament size {TOURNAMENT_SIZE}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TourError::configuration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
