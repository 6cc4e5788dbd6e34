//! ACO configuration.
//!
//! [`AcoConfig`] holds the colony size, iteration budget, and the
//! pheromone/visibility weighting parameters.

use crate::error::{TourError, TourResult};

/// Configuration for the Ant Colony engine.
///
/// # Defaults
///
/// ```
/// use u_tour::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.ant_count, 10);
/// assert_eq!(config.iteration_count, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ant_count(20)
///     .with_alpha(1.5)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants constructing a tour in each iteration.
    pub ant_count: usize,

    /// Number of construct/evaluate/reinforce cycles.
    pub iteration_count: usize,

    /// Exponent applied to the pheromone level of an edge.
    pub alpha: f64,

    /// Exponent applied to the visibility (inverse distance) of an edge.
    pub beta: f64,

    /// Fraction of pheromone removed from every edge each iteration (0.0–1.0).
    ///
    /// 0.0 keeps all learned pheromone; 1.0 forgets everything except the
    /// current iteration's deposits.
    pub evaporation_rate: f64,

    /// Pheromone level every edge starts with.
    pub initial_pheromone: f64,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 10,
            iteration_count: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            initial_pheromone: 1.0,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iteration_count(mut self, n: usize) -> Self {
        self.iteration_count = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the visibility exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    ///
    /// Out-of-range values are not clamped; [`validate`](Self::validate)
    /// rejects them.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`TourError::Configuration`] describing the first invalid parameter.
    pub fn validate(&self) -> TourResult<()> {
        if self.ant_count == 0 {
            return Err(TourError::configuration("ant_count must be at least 1"));
        }
        if self.iteration_count == 0 {
            return Err(TourError::configuration(
                "iteration_count must be at least 1",
            ));
        }
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("initial_pheromone", self.initial_pheromone),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TourError::configuration(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(TourError::configuration(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            )));
        }
        Ok(())
    }
}
