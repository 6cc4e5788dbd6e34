//! Stochastic tour optimization for the Traveling Salesman Problem.
//!
//! Two independent metaheuristics share one tour evaluator:
//!
//! - **Ant Colony Optimization (ACO)**: ants build tours city by city,
//!   guided by learned pheromone and inverse-distance visibility; the
//!   pheromone matrix evaporates and is reinforced every iteration.
//! - **Genetic Algorithm (GA)**: a population of permutations evolves by
//!   tournament selection, ordered crossover (OX) and swap mutation.
//!
//! Both engines take an immutable [`DistanceMatrix`](distance::DistanceMatrix)
//! and an explicit random generator, so every run is reproducible from its
//! seed. Validation happens when an engine is built; `run` never fails.
//!
//! # Example
//!
//! ```
//! use u_tour::aco::{AcoConfig, AntColony};
//! use u_tour::distance::DistanceMatrix;
//! use u_tour::ga::{GaConfig, GeneticAlgorithm};
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])?;
//!
//! let aco = AntColony::seeded(&dm, AcoConfig::default(), 42)?.run();
//! let ga = GeneticAlgorithm::seeded(&dm, GaConfig::default(), 42)?.run();
//! assert_eq!(aco.best_length, 80.0);
//! assert_eq!(ga.best_length, 80.0);
//! # Ok::<(), u_tour::TourError>(())
//! ```
//!
//! Loading matrices from files, plotting and report writing are left to
//! callers; the crate only exchanges tours and lengths.

pub mod aco;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod random;
pub mod solver;

pub use error::{TourError, TourResult};
pub use solver::{TourSolution, TourSolver};
