//! Common driver template.
//!
//! Every algorithm implements [`Driver`]: it receives a [`SearchContext`]
//! holding the instance, a reusable [`Evaluator`], the caller's RNG, a
//! [`ConvergenceTracker`] and the run's [`RunControl`], and returns its best
//! [`Solution`]. [`execute`] wraps the per-algorithm search with the parts
//! every run shares: the trivial-instance shortcut, context setup, and
//! packaging of the [`Outcome`].
//!
//! Drivers check [`SearchContext::should_stop`] at the top of their loop
//! and return the best solution found so far when it fires.

use crate::convergence::{ConvergencePoint, ConvergenceTracker};
use crate::error::{FlowshopError, Result};
use crate::eval::Evaluator;
use crate::instance::Instance;
use crate::operators::{is_permutation, random_permutation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How a driver generates candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Builds one solution, no iteration loop (NEH).
    ConstructOnce,
    /// Moves a single incumbent through neighbourhoods (LS, ILS, SA, Tabu).
    NeighborhoodSearch,
    /// Evolves a set of candidates (GA, ACO, PSO).
    PopulationBased,
}

/// A job sequence together with its makespan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// 0-based job indices.
    pub sequence: Vec<usize>,
    pub makespan: u64,
}

impl Solution {
    pub fn new(sequence: Vec<usize>, makespan: u64) -> Self {
        Self { sequence, makespan }
    }

    /// Evaluates `sequence` and wraps it.
    pub fn evaluated(sequence: Vec<usize>, evaluator: &mut Evaluator<'_>) -> Self {
        let makespan = evaluator.makespan(&sequence);
        Self { sequence, makespan }
    }
}

/// Starting point for the trajectory searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InitialSolution {
    /// The NEH sequence.
    #[default]
    Neh,
    /// A uniformly random permutation.
    Random,
}

/// External stop conditions for a run.
///
/// Both conditions are optional; the default never stops a run early.
#[derive(Debug, Clone, Default)]
pub struct RunControl {
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl RunControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the run once `flag` is set to `true`.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Stops the run once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Stops the run after `limit` of wall-clock time from now.
    pub fn with_time_limit(self, limit: Duration) -> Self {
        self.with_deadline(Instant::now() + limit)
    }

    pub fn should_stop(&self) -> bool {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Everything a driver needs during one run.
pub struct SearchContext<'a, R: Rng> {
    pub instance: &'a Instance,
    pub evaluator: Evaluator<'a>,
    pub rng: &'a mut R,
    pub tracker: ConvergenceTracker,
    control: &'a RunControl,
    iterations: usize,
    cancelled: bool,
}

impl<'a, R: Rng> SearchContext<'a, R> {
    pub fn new(instance: &'a Instance, rng: &'a mut R, control: &'a RunControl) -> Self {
        Self {
            instance,
            evaluator: Evaluator::new(instance),
            rng,
            tracker: ConvergenceTracker::new(),
            control,
            iterations: 0,
            cancelled: false,
        }
    }

    pub fn jobs(&self) -> usize {
        self.instance.jobs()
    }

    /// Makespan of `sequence`.
    pub fn evaluate(&mut self, sequence: &[usize]) -> u64 {
        self.evaluator.makespan(sequence)
    }

    /// Records the incumbent makespan for `iteration`.
    pub fn record(&mut self, iteration: usize, makespan: u64) {
        self.iterations = self.iterations.max(iteration);
        self.tracker.record(iteration, makespan);
    }

    /// Checks the run's stop conditions, remembering a cancellation.
    pub fn should_stop(&mut self) -> bool {
        if !self.cancelled && self.control.should_stop() {
            log::debug!("run stopped by caller after {} iterations", self.iterations);
            self.cancelled = true;
        }
        self.cancelled
    }

    /// Builds a starting solution.
    pub fn initial_solution(&mut self, initial: InitialSolution) -> Solution {
        match initial {
            InitialSolution::Neh => crate::neh::construct(&mut self.evaluator),
            InitialSolution::Random => {
                let seq = random_permutation(self.instance.jobs(), self.rng);
                Solution::evaluated(seq, &mut self.evaluator)
            }
        }
    }
}

/// A search strategy that can be run by [`execute`].
pub trait Driver {
    /// Display name of the algorithm.
    fn name(&self) -> &'static str;

    /// How the driver generates candidates; reported in [`Outcome::kind`].
    fn kind(&self) -> StrategyKind;

    /// Checks the configuration before a run.
    fn validate(&self) -> std::result::Result<(), String>;

    /// Runs the search on an instance with at least two jobs.
    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution;
}

/// Result of one driver run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub solution: Solution,
    pub kind: StrategyKind,
    pub convergence: Vec<ConvergencePoint>,
    /// Last iteration recorded in the convergence trace.
    pub iterations: usize,
    /// Number of makespan evaluations performed.
    pub evaluations: usize,
    /// Whether the run was stopped through its [`RunControl`].
    pub cancelled: bool,
}

/// Runs `driver` on `instance`.
///
/// Instances with a single job have only one schedule; it is returned
/// immediately with a one-point convergence trace.
///
/// # Errors
///
/// [`FlowshopError::InvalidParameter`] if the driver's configuration does
/// not validate.
pub fn execute<D: Driver, R: Rng>(
    driver: &D,
    instance: &Instance,
    rng: &mut R,
    control: &RunControl,
) -> Result<Outcome> {
    driver
        .validate()
        .map_err(|reason| FlowshopError::invalid_parameter(driver.name(), reason))?;

    if instance.jobs() <= 1 {
        let sequence: Vec<usize> = (0..instance.jobs()).collect();
        let makespan = sequence.first().map_or(0, |&j| instance.total_time(j));
        let mut tracker = ConvergenceTracker::with_capacity(1);
        tracker.record(0, makespan);
        return Ok(Outcome {
            solution: Solution::new(sequence, makespan),
            kind: driver.kind(),
            convergence: tracker.into_points(),
            iterations: 0,
            evaluations: 0,
            cancelled: false,
        });
    }

    let mut ctx = SearchContext::new(instance, rng, control);
    let solution = driver.search(&mut ctx);

    debug_assert!(is_permutation(&solution.sequence, instance.jobs()));
    debug_assert_eq!(ctx.evaluate(&solution.sequence), solution.makespan);

    log::debug!(
        "{} ({:?}) finished: makespan {}, {} iterations, {} evaluations",
        driver.name(),
        driver.kind(),
        solution.makespan,
        ctx.iterations,
        ctx.evaluator.evaluations()
    );

    Ok(Outcome {
        solution,
        kind: driver.kind(),
        iterations: ctx.iterations,
        evaluations: ctx.evaluator.evaluations(),
        cancelled: ctx.cancelled,
        convergence: ctx.tracker.into_points(),
    })
}
