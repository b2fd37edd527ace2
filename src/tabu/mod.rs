//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses a short-term memory
//! (the tabu list) to forbid undoing recent moves, preventing cycling and
//! pushing the search into new regions.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.
//! - Nowicki & Smutnicki (1996), "A fast tabu search algorithm for the
//!   permutation flow-shop problem"

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use types::TabuList;
