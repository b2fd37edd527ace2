//! Makespan evaluation.
//!
//! Implements the classical permutation flowshop recurrence. For schedule
//! position `i` and machine `m`:
//!
//! ```text
//! C[i][m] = max(C[i-1][m], C[i][m-1]) + p[seq[i]][m]
//! ```
//!
//! with `C[-1][m] = C[i][-1] = 0`. The makespan is `C[n-1][M-1]`.
//!
//! [`evaluate`] builds the full completion matrix. [`Evaluator`] computes
//! only the makespan using a single reusable row, which is what the search
//! loops call once per candidate.
//!
//! # Complexity
//! O(n·M) time per call. `Evaluator::makespan` allocates nothing.
//!
//! # Reference
//! Johnson (1954); Pinedo (2016), "Scheduling", Ch. 6.1

use crate::instance::Instance;
use serde::{Deserialize, Serialize};

/// Completion-time matrix and makespan for one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// `completion[position][machine]`.
    pub completion: Vec<Vec<u64>>,
    pub makespan: u64,
}

/// Evaluates `sequence` (0-based job indices) on `instance`.
///
/// Partial sequences are allowed; an empty sequence has makespan 0.
///
/// # Examples
///
/// ```
/// use u_flowshop::{evaluate, Instance};
///
/// let inst = Instance::new("toy", vec![vec![2, 3], vec![4, 1], vec![1, 5]]).unwrap();
/// let eval = evaluate(&inst, &[0, 1, 2]);
/// assert_eq!(eval.completion, vec![vec![2, 5], vec![6, 7], vec![7, 12]]);
/// assert_eq!(eval.makespan, 12);
/// ```
pub fn evaluate(instance: &Instance, sequence: &[usize]) -> Evaluation {
    let machines = instance.machines();
    let mut completion: Vec<Vec<u64>> = Vec::with_capacity(sequence.len());

    for (pos, &job) in sequence.iter().enumerate() {
        let times = instance.job_times(job);
        let mut row = vec![0u64; machines];
        for m in 0..machines {
            let above = if pos > 0 { completion[pos - 1][m] } else { 0 };
            let left = if m > 0 { row[m - 1] } else { 0 };
            row[m] = above.max(left) + times[m];
        }
        completion.push(row);
    }

    let makespan = completion
        .last()
        .and_then(|row| row.last())
        .copied()
        .unwrap_or(0);

    Evaluation {
        completion,
        makespan,
    }
}

/// Makespan evaluator with a reusable row buffer.
///
/// Borrow one per run (or per thread) and call
/// [`makespan`](Self::makespan) for every candidate.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    instance: &'a Instance,
    row: Vec<u64>,
    evaluations: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            row: vec![0; instance.machines()],
            evaluations: 0,
        }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Makespan of `sequence` (0-based job indices, possibly partial).
    pub fn makespan(&mut self, sequence: &[usize]) -> u64 {
        self.evaluations += 1;
        self.row.fill(0);
        for &job in sequence {
            let times = self.instance.job_times(job);
            let mut left = 0u64;
            for (cell, &p) in self.row.iter_mut().zip(times) {
                left = (*cell).max(left) + p;
                *cell = left;
            }
        }
        self.row.last().copied().unwrap_or(0)
    }

    /// Number of calls to [`makespan`](Self::makespan) so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

/// Per-machine and per-job figures derived from an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Busy time of each machine as a percentage of the makespan.
    pub machine_utilization: Vec<f64>,
    /// Completion time of each job (indexed by job) on the last machine.
    pub job_completion: Vec<u64>,
}

impl ScheduleMetrics {
    pub fn from_evaluation(instance: &Instance, sequence: &[usize], eval: &Evaluation) -> Self {
        let machine_utilization = (0..instance.machines())
            .map(|m| {
                if eval.makespan == 0 {
                    return 0.0;
                }
                let busy: u64 = sequence.iter().map(|&job| instance.time(job, m)).sum();
                busy as f64 / eval.makespan as f64 * 100.0
            })
            .collect();

        let last = instance.machines() - 1;
        let mut job_completion = vec![0u64; instance.jobs()];
        for (pos, &job) in sequence.iter().enumerate() {
            job_completion[job] = eval.completion[pos][last];
        }

        Self {
            machine_utilization,
            job_completion,
        }
    }
}

/// Machine-based lower bound on the makespan: the largest machine load.
pub fn lower_bound(instance: &Instance) -> u64 {
    (0..instance.machines())
        .map(|m| (0..instance.jobs()).map(|j| instance.time(j, m)).sum())
        .max()
        .unwrap_or(0)
}
