//! Ant Colony Optimization (ACO).
//!
//! Each ant builds a complete job sequence, choosing the next unplaced job
//! with probability proportional to the pheromone on the edge from the
//! previously placed job. After every round the trails evaporate and the
//! round's best sequence reinforces the edges it used.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: colony size, rounds, pheromone weight, evaporation
//! - [`PheromoneMatrix`]: job adjacency trails plus a start row
//!
//! # References
//!
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*
//! - Stützle (1998), "An ant approach to the flow shop problem"

mod config;
mod runner;
mod types;

pub use config::AcoConfig;
pub use types::PheromoneMatrix;
