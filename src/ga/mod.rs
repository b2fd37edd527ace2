//! Genetic Algorithm (GA).
//!
//! Generational GA over job permutations: parents are chosen by a
//! [`Selection`] strategy, recombined with order crossover, mutated with a
//! random swap, and the single best individual is carried over unchanged.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, operator rates, selection, parallelism
//! - [`Selection`]: tournament, roulette wheel, rank based
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Reeves (1995), "A genetic algorithm for flowshop sequencing"

mod config;
mod runner;
mod selection;

pub use config::GaConfig;
pub use selection::Selection;
