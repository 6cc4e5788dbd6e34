//! Common `(tour, length)` contract shared by both engines.
//!
//! A driver comparing heuristics only needs [`TourSolver::solve`]; the
//! engine-specific statistics stay available through each engine's own
//! `run` result.

use crate::aco::{AcoResult, AntColony};
use crate::evaluation::Tour;
use crate::ga::{GaResult, GeneticAlgorithm};
use rand::Rng;

/// A tour together with its closed length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourSolution {
    /// Visiting order.
    pub tour: Tour,
    /// Length including the closing edge.
    pub length: f64,
}

impl TourSolution {
    /// Creates a solution.
    pub fn new(tour: Tour, length: f64) -> Self {
        Self { tour, length }
    }

    /// Returns `true` if this solution is strictly shorter than `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.length < other.length
    }
}

impl From<AcoResult> for TourSolution {
    fn from(result: AcoResult) -> Self {
        Self::new(result.best_tour, result.best_length)
    }
}

impl From<GaResult> for TourSolution {
    fn from(result: GaResult) -> Self {
        Self::new(result.best_tour, result.best_length)
    }
}

/// An engine that produces one tour per call.
pub trait TourSolver {
    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Runs the engine to completion.
    fn solve(&mut self) -> TourSolution;
}

impl<R: Rng> TourSolver for AntColony<'_, R> {
    fn name(&self) -> &'static str {
        "Ant Colony Optimization"
    }

    fn solve(&mut self) -> TourSolution {
        self.run().into()
    }
}

impl<R: Rng> TourSolver for GeneticAlgorithm<'_, R> {
    fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }

    fn solve(&mut self) -> TourSolution {
        self.run().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::AcoConfig;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::{is_permutation, tour_length};
    use crate::ga::GaConfig;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
            .expect("valid")
    }

    #[test]
    fn test_solution_comparison() {
        let better = TourSolution::new(vec![0, 1, 2], 10.0);
        let worse = TourSolution::new(vec![0, 2, 1], 15.0);
        assert!(better.is_better_than(&worse));
        assert!(!worse.is_better_than(&better));
        assert!(!better.is_better_than(&better.clone()));
    }

    #[test]
    fn test_engines_behind_trait() {
        let dm = square();
        let mut solvers: Vec<Box<dyn TourSolver + '_>> = vec![
            Box::new(
                AntColony::seeded(&dm, AcoConfig::default().with_iteration_count(20), 1)
                    .expect("valid"),
            ),
            Box::new(
                GeneticAlgorithm::seeded(
                    &dm,
                    GaConfig::default()
                        .with_population_size(10)
                        .with_generation_count(20),
                    1,
                )
                .expect("valid"),
            ),
        ];

        for solver in &mut solvers {
            let solution = solver.solve();
            assert!(is_permutation(&solution.tour, 4), "{}", solver.name());
            assert_eq!(solution.length, tour_length(&solution.tour, &dm));
        }
        assert_eq!(solvers[0].name(), "Ant Colony Optimization");
        assert_eq!(solvers[1].name(), "Genetic Algorithm");
    }
}
