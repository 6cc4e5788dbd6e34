//! Ant Colony Optimization (Ant System) for the TSP.
//!
//! Each iteration, every ant builds a tour city by city, choosing the next
//! city with probability proportional to
//! `pheromone[i][j]^alpha * visibility[i][j]^beta`. After all ants finish,
//! the pheromone matrix evaporates and each ant reinforces the edges of its
//! path with `1 / length`.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: colony size, iteration budget and weighting parameters
//! - [`AntColony`]: the engine; owns the pheromone matrix and the generator
//! - [`PheromoneMatrix`]: learned per-edge desirability
//! - [`AcoResult`]: best tour, its length and run statistics
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AntColony, VISIBILITY_EPSILON};
