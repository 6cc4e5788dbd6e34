//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → replace.

use super::config::GaConfig;
use super::operators::{mutate, ox_child, random_cuts};
use super::selection::{tournament, TOURNAMENT_SIZE};
use crate::distance::DistanceMatrix;
use crate::error::{TourError, TourResult};
use crate::evaluation::{tour_length, Tour};
use crate::random::{create_rng, random_permutation};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Shortest tour in the final population.
    pub best_tour: Tour,

    /// Length of `best_tour` (closing edge included).
    pub best_length: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Shortest length in each evaluated population, starting with the
    /// initial one. Without elitism this is not necessarily monotone.
    pub history: Vec<f64>,
}

/// Genetic Algorithm engine for one distance matrix.
///
/// The population is created at the start of [`run`](Self::run) and
/// replaced wholesale every generation; parents never survive into the
/// next generation.
///
/// # Usage
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::ga::{GaConfig, GeneticAlgorithm};
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])?;
/// let config = GaConfig::default().with_population_size(20).with_generation_count(30);
/// let mut ga = GeneticAlgorithm::seeded(&dm, config, 42)?;
/// let result = ga.run();
/// assert_eq!(result.best_tour.len(), 4);
/// # Ok::<(), u_tour::TourError>(())
/// ```
#[derive(Debug)]
pub struct GeneticAlgorithm<'a, R: Rng> {
    distances: &'a DistanceMatrix,
    config: GaConfig,
    population: Vec<Tour>,
    rng: R,
}

impl<'a> GeneticAlgorithm<'a, StdRng> {
    /// Creates an engine driven by a [`StdRng`] seeded with `seed`.
    ///
    /// # Errors
    /// See [`GeneticAlgorithm::new`].
    pub fn seeded(distances: &'a DistanceMatrix, config: GaConfig, seed: u64) -> TourResult<Self> {
        Self::new(distances, config, create_rng(seed))
    }
}

impl<'a, R: Rng> GeneticAlgorithm<'a, R> {
    /// Creates an engine.
    ///
    /// # Errors
    /// - [`TourError::InvalidInput`] if the matrix has fewer than two cities
    ///   or the population is smaller than the tournament size
    /// - [`TourError::Configuration`] for other invalid parameters
    pub fn new(distances: &'a DistanceMatrix, config: GaConfig, rng: R) -> TourResult<Self> {
        config.validate()?;
        if distances.size() < 2 {
            return Err(TourError::invalid_input(format!(
                "genetic algorithm needs at least two cities, got {}",
                distances.size()
            )));
        }
        Ok(Self {
            distances,
            population: Vec::with_capacity(config.population_size),
            config,
            rng,
        })
    }

    /// The current population (empty before the first run).
    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA optimization.
    pub fn run(&mut self) -> GaResult {
        self.run_with_cancel(None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If the flag is set, evolution stops before the next generation and
    /// the best member of the current population is returned.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> GaResult {
        // 1. Initialize population
        let n = self.distances.size();
        self.population = (0..self.config.population_size)
            .map(|_| random_permutation(n, &mut self.rng))
            .collect();

        let mut history = Vec::with_capacity(self.config.generation_count + 1);
        let mut generations = 0usize;
        let mut cancelled = false;

        // 2. Evolutionary loop
        for generation in 0..self.config.generation_count {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let lengths = self.evaluate_population();
            let (_, gen_best) = best_of(&lengths);
            history.push(gen_best);

            self.population = self.next_generation(&lengths);
            generations += 1;

            tracing::debug!(generation, gen_best, "ga generation complete");
        }

        // 3. Best of the final population
        let lengths = self.evaluate_population();
        let (best_idx, best_length) = best_of(&lengths);
        history.push(best_length);

        tracing::info!(best_length, generations, cancelled, "ga run finished");

        GaResult {
            best_tour: self.population[best_idx].clone(),
            best_length,
            generations,
            cancelled,
            history,
        }
    }

    /// Lengths of every individual, recomputed from scratch.
    fn evaluate_population(&self) -> Vec<f64> {
        self.population
            .iter()
            .map(|tour| tour_length(tour, self.distances))
            .collect()
    }

    /// Breeds a full replacement population from the current one.
    fn next_generation(&mut self, lengths: &[f64]) -> Vec<Tour> {
        let n = self.distances.size();
        let mut next_gen = Vec::with_capacity(self.config.population_size);

        while next_gen.len() < self.config.population_size {
            // Selection: two independent tournaments
            let p1 = tournament(lengths, TOURNAMENT_SIZE, &mut self.rng);
            let p2 = tournament(lengths, TOURNAMENT_SIZE, &mut self.rng);

            // Crossover
            let (start, end) = random_cuts(n, &mut self.rng);
            let mut child = ox_child(&self.population[p1], &self.population[p2], start, end);

            // Mutation
            mutate(&mut child, self.config.mutation_rate, &mut self.rng);

            next_gen.push(child);
        }

        next_gen
    }
}

/// Index and length of the shortest tour; the first one wins ties.
fn best_of(lengths: &[f64]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (i, &length) in lengths.iter().enumerate() {
        if length < best.1 {
            best = (i, length);
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
