//! Convergence tracking.

use serde::{Deserialize, Serialize};

/// Best makespan known at a given iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePoint {
    pub iteration: usize,
    pub makespan: f64,
}

/// Records `(iteration, best-so-far)` pairs during a run.
///
/// Drivers report the makespan of whatever they consider their incumbent;
/// the tracker keeps the running minimum, so the recorded trace is
/// non-increasing even for non-elitist searches such as SA.
#[derive(Debug, Clone, Default)]
pub struct ConvergenceTracker {
    points: Vec<ConvergencePoint>,
    best: Option<u64>,
}

impl ConvergenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            best: None,
        }
    }

    /// Records one point for `iteration`, folding `makespan` into the
    /// running best.
    pub fn record(&mut self, iteration: usize, makespan: u64) {
        let best = self.best.map_or(makespan, |b| b.min(makespan));
        self.best = Some(best);
        self.points.push(ConvergencePoint {
            iteration,
            makespan: best as f64,
        });
    }

    /// Best makespan recorded so far.
    pub fn best(&self) -> Option<u64> {
        self.best
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ConvergencePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<ConvergencePoint> {
        self.points
    }
}
