//! Iterated Local Search (ILS).
//!
//! Alternates perturbation (random swaps) with local search descent, and
//! decides through an acceptance criterion whether the re-optimised
//! solution replaces the incumbent.
//!
//! # References
//!
//! - Lourenço, Martin & Stützle (2003), "Iterated Local Search"
//! - Ruiz & Stützle (2007), "A simple and effective iterated greedy
//!   algorithm for the permutation flowshop scheduling problem" (constant
//!   temperature acceptance)

mod config;
mod runner;

pub use config::{Acceptance, IlsConfig, Perturbation};
