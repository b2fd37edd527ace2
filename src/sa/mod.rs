//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases with the temperature, letting the search leave local optima.
//! The best schedule ever visited is kept apart from the current one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Osman & Potts (1989), "Simulated annealing for permutation flow-shop
//!   scheduling"

mod config;
mod runner;

pub use config::{SaConfig, SaMove, MIN_TEMPERATURE};
