//! Algorithm dispatch.
//!
//! [`run_algorithm`] is the single entry point used by the surrounding
//! layer: it resolves the algorithm name, validates the instance and the
//! parameters, runs the driver with a seeded RNG, and packages a
//! [`RunResult`].

use crate::driver::RunControl;
use crate::error::{FlowshopError, Result};
use crate::eval::{evaluate, ScheduleMetrics};
use crate::instance::Instance;
use crate::params::{AlgorithmConfig, Parameters};
use crate::random::create_rng;
use crate::result::RunResult;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// The algorithms that can be dispatched by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "NEH Heuristic")]
    Neh,
    #[serde(rename = "Local Search")]
    LocalSearch,
    #[serde(rename = "Iterated Local Search")]
    IteratedLocalSearch,
    #[serde(rename = "Simulated Annealing")]
    SimulatedAnnealing,
    #[serde(rename = "Genetic Algorithm")]
    GeneticAlgorithm,
    #[serde(rename = "Tabu Search")]
    TabuSearch,
    #[serde(rename = "Ant Colony Optimization")]
    AntColony,
    #[serde(rename = "Particle Swarm Optimization")]
    ParticleSwarm,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Neh,
        Algorithm::LocalSearch,
        Algorithm::IteratedLocalSearch,
        Algorithm::SimulatedAnnealing,
        Algorithm::GeneticAlgorithm,
        Algorithm::TabuSearch,
        Algorithm::AntColony,
        Algorithm::ParticleSwarm,
    ];

    /// Display name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Neh => "NEH Heuristic",
            Algorithm::LocalSearch => "Local Search",
            Algorithm::IteratedLocalSearch => "Iterated Local Search",
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
            Algorithm::GeneticAlgorithm => "Genetic Algorithm",
            Algorithm::TabuSearch => "Tabu Search",
            Algorithm::AntColony => "Ant Colony Optimization",
            Algorithm::ParticleSwarm => "Particle Swarm Optimization",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = FlowshopError;

    /// Parses an exact display name.
    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| FlowshopError::UnknownAlgorithm(s.to_string()))
    }
}

/// Runs `algorithm` on `instance` with an RNG seeded from `seed`.
///
/// # Errors
///
/// - [`FlowshopError::UnknownAlgorithm`] if the name is not recognised
/// - [`FlowshopError::InvalidInstance`] if the instance is malformed
/// - [`FlowshopError::InvalidParameter`] if a parameter has the wrong type
///
/// # Examples
///
/// ```
/// use u_flowshop::{run_algorithm, Instance, Parameters};
///
/// let inst = Instance::new("toy", vec![vec![2, 3], vec![4, 1], vec![1, 5]]).unwrap();
/// let result = run_algorithm("NEH Heuristic", &inst, &Parameters::new(), 42).unwrap();
/// assert_eq!(result.schedule, vec![3, 2, 1]);
/// assert_eq!(result.makespan, 10);
/// ```
pub fn run_algorithm(
    algorithm: &str,
    instance: &Instance,
    params: &Parameters,
    seed: u64,
) -> Result<RunResult> {
    let mut rng = create_rng(seed);
    run_algorithm_with(algorithm, instance, params, &mut rng, &RunControl::new())
}

/// Like [`run_algorithm`], with a caller-supplied RNG and stop conditions.
///
/// A run stopped through `control` is not an error: it returns the best
/// schedule found so far with `cancelled` set.
pub fn run_algorithm_with<R: Rng>(
    algorithm: &str,
    instance: &Instance,
    params: &Parameters,
    rng: &mut R,
    control: &RunControl,
) -> Result<RunResult> {
    let algorithm: Algorithm = algorithm.parse()?;
    instance.validate()?;
    let (config, adjustments) = AlgorithmConfig::from_parameters(algorithm, params)?;

    log::info!(
        "running {algorithm} on {} ({} jobs x {} machines)",
        instance.name(),
        instance.jobs(),
        instance.machines()
    );

    let start = Instant::now();
    let outcome = config.run(instance, rng, control)?;
    let duration_seconds = start.elapsed().as_secs_f64();

    let sequence = outcome.solution.sequence;
    let evaluation = evaluate(instance, &sequence);
    let metrics = ScheduleMetrics::from_evaluation(instance, &sequence, &evaluation);

    log::info!(
        "{algorithm} finished on {}: makespan {} in {duration_seconds:.3}s",
        instance.name(),
        evaluation.makespan
    );

    Ok(RunResult {
        algorithm: algorithm.as_str().to_string(),
        instance_name: instance.name().to_string(),
        jobs: instance.jobs(),
        machines: instance.machines(),
        schedule: sequence.iter().map(|&job| job + 1).collect(),
        makespan: evaluation.makespan,
        duration_seconds,
        convergence: outcome.convergence,
        parameters: params.clone(),
        adjustments,
        iterations: outcome.iterations,
        cancelled: outcome.cancelled,
        machine_utilization: metrics.machine_utilization,
        job_completion: metrics.job_completion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.to_string(), algorithm.as_str());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "Quantum Annealing".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, FlowshopError::UnknownAlgorithm("Quantum Annealing".into()));
        // Names are matched exactly
        assert!("tabu search".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Algorithm::AntColony).unwrap();
        assert_eq!(json, "\"Ant Colony Optimization\"");
    }
}
