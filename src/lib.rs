//! Permutation flowshop scheduling.
//!
//! Given a `jobs × machines` matrix of processing times, find the job order
//! that minimises the makespan when every job visits every machine in the
//! same order. The crate provides:
//!
//! - **Evaluation**: exact makespan via the classical completion-time
//!   recurrence, with an allocation-free [`Evaluator`] for search loops.
//! - **Operators**: swap, insertion, 2-opt, scramble and order crossover on
//!   job permutations.
//! - **NEH**: the Nawaz–Enscore–Ham constructive heuristic.
//! - **Local Search / ILS**: best-improvement descent and its iterated
//!   variant with perturbation and acceptance rules.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with geometric
//!   cooling.
//! - **Genetic Algorithm (GA)**: generational GA with order crossover and
//!   elitism.
//! - **Tabu Search (TS)**: best admissible move with a FIFO tabu list and
//!   aspiration.
//! - **Ant Colony Optimization (ACO)** and **Particle Swarm Optimization
//!   (PSO)**.
//! - **Dispatch**: [`run_algorithm`] resolves an algorithm by name, turns a
//!   loose parameter map into a typed configuration and returns a
//!   serialisable [`RunResult`].
//!
//! # Architecture
//!
//! Every algorithm implements [`driver::Driver`] and is run through
//! [`driver::execute`], which owns the shared parts of a run: the trivial
//! single-job case, the [`Evaluator`], the caller's RNG, convergence
//! tracking and cancellation. Randomness is always passed in explicitly, so
//! a run is a pure function of instance, algorithm, parameters and seed.
//!
//! # Example
//!
//! ```
//! use u_flowshop::{run_algorithm, Instance, Parameters};
//! use serde_json::json;
//!
//! let inst = Instance::new(
//!     "4x3",
//!     vec![vec![5, 9, 8], vec![9, 3, 10], vec![9, 4, 5], vec![4, 8, 8]],
//! )
//! .unwrap();
//!
//! let mut params = Parameters::new();
//! params.insert("max_iterations".into(), json!(300));
//! let result = run_algorithm("Simulated Annealing", &inst, &params, 7).unwrap();
//!
//! assert_eq!(result.schedule.len(), 4);
//! assert!(result.makespan >= u_flowshop::eval::lower_bound(&inst));
//! ```

pub mod aco;
pub mod convergence;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod eval;
pub mod ga;
pub mod ils;
pub mod instance;
pub mod local_search;
pub mod neh;
pub mod operators;
pub mod params;
pub mod pso;
pub mod random;
pub mod result;
pub mod sa;
pub mod tabu;

pub use convergence::{ConvergencePoint, ConvergenceTracker};
pub use dispatch::{run_algorithm, run_algorithm_with, Algorithm};
pub use driver::{InitialSolution, RunControl};
pub use error::{FlowshopError, Result};
pub use eval::{evaluate, Evaluation, Evaluator};
pub use instance::{Instance, InstanceCatalog, InstanceProvider};
pub use operators::Neighborhood;
pub use params::{AlgorithmConfig, ParameterAdjustment, Parameters};
pub use result::RunResult;
