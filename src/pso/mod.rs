//! Particle Swarm Optimization (PSO).
//!
//! Particles move through a continuous space with one dimension per job.
//! A position is turned into a job sequence by the smallest position value
//! rule: jobs are ordered by ascending coordinate.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle swarm optimization"
//! - Tasgetiren et al. (2007), "A particle swarm optimization algorithm for
//!   makespan and total flowtime minimization in the permutation flowshop
//!   sequencing problem"

mod config;
mod runner;
mod types;

pub use config::PsoConfig;
pub use types::{decode_spv, Particle};
