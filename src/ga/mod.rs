//! Genetic Algorithm for the TSP.
//!
//! Tours are permutation chromosomes. Each generation, every child is bred
//! from two tournament winners with ordered crossover and then possibly
//! swap-mutated; the children replace the whole population.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation budget, mutation rate
//! - [`GeneticAlgorithm`]: the engine; owns the population and the generator
//! - [`GaResult`]: best tour, its length and per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: ordered crossover (OX) and swap mutation
//! - [`selection`]: fixed-size tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GeneticAlgorithm};
pub use selection::TOURNAMENT_SIZE;
