//! Run result record.

use crate::convergence::ConvergencePoint;
use crate::params::{ParameterAdjustment, Parameters};
use serde::{Deserialize, Serialize};

/// Everything one dispatched run produces.
///
/// Owned entirely by the caller; serialisable for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Display name of the algorithm.
    pub algorithm: String,
    pub instance_name: String,
    pub jobs: usize,
    pub machines: usize,
    /// Best sequence found, as 1-based job identifiers.
    pub schedule: Vec<usize>,
    pub makespan: u64,
    /// Wall-clock time of the search.
    pub duration_seconds: f64,
    pub convergence: Vec<ConvergencePoint>,
    /// Parameters as supplied by the caller.
    pub parameters: Parameters,
    /// Values that were clamped or rounded before the run.
    #[serde(default)]
    pub adjustments: Vec<ParameterAdjustment>,
    /// Last iteration recorded in `convergence`.
    #[serde(default)]
    pub iterations: usize,
    /// Whether the run was stopped early by its caller.
    #[serde(default)]
    pub cancelled: bool,
    /// Busy time of each machine as a percentage of the makespan.
    #[serde(default)]
    pub machine_utilization: Vec<f64>,
    /// Completion time of each job on the last machine, indexed by job.
    #[serde(default)]
    pub job_completion: Vec<u64>,
}

impl RunResult {
    /// The schedule as 0-based job indices.
    ///
    /// Returns `None` if the record holds a job identifier of 0, which can
    /// only come from a hand-written or foreign record.
    pub fn sequence(&self) -> Option<Vec<usize>> {
        self.schedule.iter().map(|&job| job.checked_sub(1)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunResult {
        RunResult {
            algorithm: "NEH Heuristic".into(),
            instance_name: "toy".into(),
            jobs: 3,
            machines: 2,
            schedule: vec![3, 2, 1],
            makespan: 10,
            duration_seconds: 0.0001,
            convergence: vec![ConvergencePoint {
                iteration: 0,
                makespan: 10.0,
            }],
            parameters: Parameters::new(),
            adjustments: Vec::new(),
            iterations: 0,
            cancelled: false,
            machine_utilization: vec![70.0, 90.0],
            job_completion: vec![10, 6, 4],
        }
    }

    #[test]
    fn test_json_round_trip() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: RunResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_minimal_record_deserializes() {
        let json = r#"{
            "algorithm": "Tabu Search",
            "instance_name": "ta001",
            "jobs": 2,
            "machines": 1,
            "schedule": [2, 1],
            "makespan": 7,
            "duration_seconds": 0.5,
            "convergence": [{"iteration": 0, "makespan": 7.0}],
            "parameters": {"tabu_size": 10}
        }"#;
        let result: RunResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sequence(), Some(vec![1, 0]));
        assert!(result.adjustments.is_empty());
        assert!(!result.cancelled);
    }

    #[test]
    fn test_sequence_rejects_zero_job_id() {
        let mut result = sample();
        assert_eq!(result.sequence(), Some(vec![2, 1, 0]));
        result.schedule = vec![0, 1];
        assert_eq!(result.sequence(), None);
    }
}
