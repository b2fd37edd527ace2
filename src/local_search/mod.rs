//! Local Search (LS).
//!
//! Best-improvement descent: evaluate the whole neighbourhood of the
//! incumbent and move to its best member while that improves the makespan.
//! Stops at a local optimum or when the iteration budget runs out.
//!
//! # References
//!
//! - Aarts & Lenstra (1997), *Local Search in Combinatorial Optimization*
//! - Taillard (1990), insertion neighbourhood for the PFSP

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::descend;
