//! ACO construct/evaluate/reinforce loop.
//!
//! [`AntColony`] owns the pheromone matrix and the random generator and
//! orchestrates the colony: every iteration builds all tours from the same
//! frozen pheromone state, then evaporates and reinforces.

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::distance::DistanceMatrix;
use crate::error::TourResult;
use crate::evaluation::{tour_length, Tour};
use crate::random::{create_rng, sample_weighted};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Offset added to distances before inverting them, so zero-length edges
/// get a large but finite visibility.
pub const VISIBILITY_EPSILON: f64 = 1e-10;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Shortest tour found across all iterations.
    pub best_tour: Tour,

    /// Length of `best_tour` (closing edge included).
    pub best_length: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Number of tours constructed and evaluated.
    pub evaluations: usize,

    /// Construction steps where the transition weights summed to zero or
    /// overflowed and a uniform choice was made instead.
    pub degenerate_steps: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-so-far length at the end of each iteration.
    pub history: Vec<f64>,
}

/// Ant Colony Optimization engine for one distance matrix.
///
/// After each iteration every ant adds `1 / length` to the directed edges of
/// its open path. Tours of length zero deposit nothing, which keeps every
/// pheromone level finite. The global best changes only on a strictly
/// shorter tour, so ties keep the earlier one.
///
/// # Usage
///
/// ```
/// use u_tour::aco::{AcoConfig, AntColony};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::tour_length;
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])?;
/// let config = AcoConfig::default().with_iteration_count(20);
/// let mut colony = AntColony::seeded(&dm, config, 42)?;
/// let result = colony.run();
/// assert_eq!(result.best_tour.len(), 4);
/// assert_eq!(result.best_length, tour_length(&result.best_tour, &dm));
/// # Ok::<(), u_tour::TourError>(())
/// ```
#[derive(Debug)]
pub struct AntColony<'a, R: Rng> {
    distances: &'a DistanceMatrix,
    config: AcoConfig,
    pheromone: PheromoneMatrix,
    /// `(1 / (d + eps))^beta`, row-major; fixed for the lifetime of the colony.
    visibility: Vec<f64>,
    rng: R,
}

impl<'a> AntColony<'a, StdRng> {
    /// Creates a colony driven by a [`StdRng`] seeded with `seed`.
    ///
    /// # Errors
    /// See [`AntColony::new`].
    pub fn seeded(distances: &'a DistanceMatrix, config: AcoConfig, seed: u64) -> TourResult<Self> {
        Self::new(distances, config, create_rng(seed))
    }
}

impl<'a, R: Rng> AntColony<'a, R> {
    /// Creates a colony with a uniform pheromone matrix.
    ///
    /// # Errors
    /// [`TourError::Configuration`](crate::TourError::Configuration) if the
    /// configuration is invalid.
    pub fn new(distances: &'a DistanceMatrix, config: AcoConfig, rng: R) -> TourResult<Self> {
        config.validate()?;

        let n = distances.size();
        let visibility = (0..n * n)
            .map(|k| distances.get(k / n, k % n))
            .map(|d| (1.0 / (d + VISIBILITY_EPSILON)).powf(config.beta))
            .collect();

        Ok(Self {
            distances,
            pheromone: PheromoneMatrix::new(n, config.initial_pheromone),
            visibility,
            config,
            rng,
        })
    }

    /// The current pheromone state.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// The configuration this colony was built with.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs all iterations and returns the best tour found.
    ///
    /// Calling `run` again continues from the learned pheromone state.
    pub fn run(&mut self) -> AcoResult {
        self.run_with_cancel(None)
    }

    /// Runs the colony with an optional cancellation token.
    ///
    /// The flag is checked after each completed iteration, so at least one
    /// iteration always runs and the result always holds a valid tour.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> AcoResult {
        let mut best_tour: Tour = Vec::new();
        let mut best_length = f64::INFINITY;
        let mut history = Vec::with_capacity(self.config.iteration_count);
        let mut degenerate_steps = 0usize;
        let mut evaluations = 0usize;
        let mut cancelled = false;

        for iteration in 0..self.config.iteration_count {
            // Construct every ant from the same pheromone snapshot
            let mut ants: Vec<(Tour, f64)> = Vec::with_capacity(self.config.ant_count);
            for _ in 0..self.config.ant_count {
                let (tour, fallbacks) = self.construct_tour();
                degenerate_steps += fallbacks;
                let length = tour_length(&tour, self.distances);
                ants.push((tour, length));
            }
            evaluations += ants.len();

            self.update_pheromone(&ants);

            // Strict improvement only; the first ant wins ties
            let mut iteration_best = 0;
            for (i, (_, length)) in ants.iter().enumerate().skip(1) {
                if *length < ants[iteration_best].1 {
                    iteration_best = i;
                }
            }
            if ants[iteration_best].1 < best_length || best_tour.is_empty() {
                let (tour, length) = ants.swap_remove(iteration_best);
                best_tour = tour;
                best_length = length;
            }

            history.push(best_length);
            tracing::debug!(iteration, best_length, "aco iteration complete");

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
        }

        tracing::info!(
            best_length,
            iterations = history.len(),
            degenerate_steps,
            cancelled,
            "aco run finished"
        );

        AcoResult {
            best_tour,
            best_length,
            iterations: history.len(),
            evaluations,
            degenerate_steps,
            cancelled,
            history,
        }
    }

    /// Builds one ant's tour. Also returns how many steps fell back to a
    /// uniform choice.
    fn construct_tour(&mut self) -> (Tour, usize) {
        let n = self.distances.size();
        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut weights = vec![0.0; n];
        let mut fallbacks = 0;

        let mut current = self.rng.random_range(0..n);
        tour.push(current);
        visited[current] = true;

        while tour.len() < n {
            self.transition_weights(current, &visited, &mut weights);
            let next = match sample_weighted(&weights, &mut self.rng) {
                Some(city) => city,
                None => {
                    fallbacks += 1;
                    tracing::trace!(current, "zero transition mass, choosing uniformly");
                    self.uniform_unvisited(&visited, n - tour.len())
                }
            };
            tour.push(next);
            visited[next] = true;
            current = next;
        }

        (tour, fallbacks)
    }

    /// Fills `weights[j]` with `tau(current, j)^alpha * eta(current, j)^beta`
    /// for unvisited `j` and zero for visited cities.
    fn transition_weights(&self, current: usize, visited: &[bool], weights: &mut [f64]) {
        let n = self.distances.size();
        let tau = self.pheromone.row(current);
        let eta = &self.visibility[current * n..(current + 1) * n];
        for (j, weight) in weights.iter_mut().enumerate() {
            *weight = if visited[j] {
                0.0
            } else {
                tau[j].powf(self.config.alpha) * eta[j]
            };
        }
    }

    /// Picks one of the `remaining` unvisited cities uniformly.
    fn uniform_unvisited(&mut self, visited: &[bool], remaining: usize) -> usize {
        let k = self.rng.random_range(0..remaining);
        visited
            .iter()
            .enumerate()
            .filter(|(_, seen)| !**seen)
            .nth(k)
            .map(|(city, _)| city)
            .unwrap_or_else(|| unreachable!("{remaining} unvisited cities must exist"))
    }

    /// Evaporates every edge, then reinforces each ant's path with `1/length`.
    fn update_pheromone(&mut self, ants: &[(Tour, f64)]) {
        self.pheromone.evaporate(self.config.evaporation_rate);
        for (tour, length) in ants {
            self.pheromone.reinforce_path(tour, *length);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TourError;
    use crate::evaluation::is_permutation;

    fn four_city() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("valid")
    }

    fn circle(n: usize) -> DistanceMatrix {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                (10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        DistanceMatrix::from_coords(&coords).expect("valid")
    }

    #[test]
    fn test_single_ant_single_iteration_agrees_with_evaluator() {
        let dm = four_city();
        let config = AcoConfig::default()
            .with_ant_count(1)
            .with_iteration_count(1);
        let mut colony = AntColony::seeded(&dm, config, 7).expect("valid");

        let result = colony.run();

        assert!(is_permutation(&result.best_tour, 4));
        assert_eq!(result.best_length, tour_length(&result.best_tour, &dm));
        assert_eq!(result.iterations, 1);
        assert_eq!(result.evaluations, 1);
        assert_eq!(result.history, vec![result.best_length]);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let dm = four_city();
        let err = AntColony::seeded(&dm, AcoConfig::default().with_ant_count(0), 1).unwrap_err();
        assert!(matches!(err, TourError::Configuration(_)));

        let err =
            AntColony::seeded(&dm, AcoConfig::default().with_iteration_count(0), 1).unwrap_err();
        assert!(matches!(err, TourError::Configuration(_)));
    }

    #[test]
    fn test_single_city_trivial_tour() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        let config = AcoConfig::default().with_ant_count(3).with_iteration_count(2);
        let mut colony = AntColony::seeded(&dm, config, 1).expect("valid");

        let result = colony.run();

        assert_eq!(result.best_tour, vec![0]);
        assert_eq!(result.best_length, 0.0);
        assert_eq!(result.degenerate_steps, 0);
    }

    #[test]
    fn test_initial_pheromone_uniform() {
        let dm = four_city();
        let colony =
            AntColony::seeded(&dm, AcoConfig::default().with_initial_pheromone(0.3), 1)
                .expect("valid");
        assert!(colony.pheromone().levels().all(|l| (l - 0.3).abs() < 1e-15));
    }

    #[test]
    fn test_pheromone_update_matches_rule() {
        let dm = four_city();
        let config = AcoConfig::default()
            .with_ant_count(1)
            .with_iteration_count(1)
            .with_evaporation_rate(0.5)
            .with_initial_pheromone(1.0);
        let mut colony = AntColony::seeded(&dm, config, 11).expect("valid");

        let result = colony.run();
        let tour = &result.best_tour;
        let deposit = 1.0 / result.best_length;
        let p = colony.pheromone();

        for from in 0..4 {
            for to in 0..4 {
                let on_path = tour.windows(2).any(|w| w[0] == from && w[1] == to);
                let expected = if on_path { 0.5 + deposit } else { 0.5 };
                assert!(
                    (p.get(from, to) - expected).abs() < 1e-12,
                    "edge ({from}, {to}): {} != {expected}",
                    p.get(from, to)
                );
            }
        }
    }

    #[test]
    fn test_pheromone_nonnegative_and_history_monotone() {
        let dm = circle(12);
        let config = AcoConfig::default()
            .with_ant_count(8)
            .with_iteration_count(40)
            .with_evaporation_rate(1.0);
        let mut colony = AntColony::seeded(&dm, config, 3).expect("valid");

        let result = colony.run();

        assert!(colony.pheromone().min_level() >= 0.0);
        assert_eq!(result.history.len(), 40);
        for window in result.history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best length increased: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(*result.history.last().expect("non-empty"), result.best_length);
    }

    #[test]
    fn test_ties_keep_first_best() {
        // Every tour has the same length, so the first iteration's best must stick
        let n = 6;
        let data = (0..n * n)
            .map(|k| if k % (n + 1) == 0 { 0.0 } else { 3.0 })
            .collect();
        let dm = DistanceMatrix::from_data(n, data).expect("valid");
        let config = AcoConfig::default().with_ant_count(4);

        let first = AntColony::seeded(&dm, config.clone().with_iteration_count(1), 5)
            .expect("valid")
            .run();
        let long = AntColony::seeded(&dm, config.with_iteration_count(30), 5)
            .expect("valid")
            .run();

        assert_eq!(first.best_length, 18.0);
        assert_eq!(long.best_length, 18.0);
        assert_eq!(long.best_tour, first.best_tour);
    }

    #[test]
    fn test_finds_circle_tour() {
        let dm = circle(10);
        let optimal = tour_length(&(0..10).collect::<Vec<_>>(), &dm);
        let config = AcoConfig::default()
            .with_ant_count(10)
            .with_iteration_count(50);
        let mut colony = AntColony::seeded(&dm, config, 42).expect("valid");

        let result = colony.run();

        assert!(is_permutation(&result.best_tour, 10));
        assert!(
            result.best_length <= optimal * 1.1,
            "expected near-optimal circle tour, got {} vs {optimal}",
            result.best_length
        );
    }

    #[test]
    fn test_deterministic_with_seed() {
        let dm = circle(9);
        let config = AcoConfig::default().with_ant_count(5).with_iteration_count(10);

        let r1 = AntColony::seeded(&dm, config.clone(), 99).expect("valid").run();
        let r2 = AntColony::seeded(&dm, config, 99).expect("valid").run();

        assert_eq!(r1.best_tour, r2.best_tour);
        assert_eq!(r1.best_length, r2.best_length);
        assert_eq!(r1.history, r2.history);
    }

    #[test]
    fn test_zero_distances_use_epsilon() {
        // All cities coincide: visibility is huge but finite for every edge
        let dm = DistanceMatrix::from_data(4, vec![0.0; 16]).expect("valid");
        let config = AcoConfig::default().with_ant_count(4).with_iteration_count(3);
        let mut colony = AntColony::seeded(&dm, config, 5).expect("valid");

        let result = colony.run();

        assert!(is_permutation(&result.best_tour, 4));
        assert_eq!(result.best_length, 0.0);
        assert!(colony.pheromone().levels().all(f64::is_finite));
    }

    #[test]
    fn test_underflow_falls_back_to_uniform() {
        // (1 / 1e300)^2 underflows, so every transition weight is zero
        let big = 1e300;
        let dm = DistanceMatrix::from_data(
            5,
            (0..25).map(|k| if k % 6 == 0 { 0.0 } else { big }).collect(),
        )
        .expect("valid");
        let config = AcoConfig::default()
            .with_ant_count(2)
            .with_iteration_count(5)
            .with_evaporation_rate(1.0)
            .with_beta(2.0);
        let mut colony = AntColony::seeded(&dm, config, 8).expect("valid");

        let result = colony.run();

        assert!(result.degenerate_steps > 0);
        assert!(is_permutation(&result.best_tour, 5));
        assert_eq!(result.best_length, tour_length(&result.best_tour, &dm));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 9.0],
            vec![9.0, 0.0, 1.0],
            vec![1.0, 9.0, 0.0],
        ])
        .expect("valid");
        let config = AcoConfig::default().with_ant_count(6).with_iteration_count(20);
        let mut colony = AntColony::seeded(&dm, config, 2).expect("valid");

        let result = colony.run();

        // the cheap direction is 0 -> 1 -> 2 -> 0
        assert_eq!(result.best_length, 3.0);
    }

    #[test]
    fn test_cancellation_keeps_valid_best() {
        let dm = circle(8);
        let config = AcoConfig::default().with_iteration_count(1000);
        let mut colony = AntColony::seeded(&dm, config, 4).expect("valid");

        let cancel = Arc::new(AtomicBool::new(true));
        let result = colony.run_with_cancel(Some(cancel));

        assert!(result.cancelled);
        assert_eq!(result.iterations, 1);
        assert!(is_permutation(&result.best_tour, 8));
    }

    #[test]
    fn test_custom_rng_injection() {
        let dm = four_city();
        let rng = create_rng(123);
        let mut colony = AntColony::new(&dm, AcoConfig::default(), rng).expect("valid");
        let result = colony.run();
        assert!(is_permutation(&result.best_tour, 4));
    }
}
