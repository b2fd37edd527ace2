//! ACO execution loop.
//!
//! # Algorithm
//!
//! 1. Set every trail to `initial_pheromone`
//! 2. For each round:
//!    a. Every ant builds a sequence from the trails
//!    b. Evaporate all trails by `evaporation_rate`
//!    c. Reinforce the edges of the round's best sequence
//!    d. Update global best
//! 3. Terminate after `iterations` rounds

use super::config::AcoConfig;
use super::types::PheromoneMatrix;
use crate::driver::{Driver, SearchContext, Solution, StrategyKind};
use crate::eval::lower_bound;
use rand::Rng;

impl Driver for AcoConfig {
    fn name(&self) -> &'static str {
        "Ant Colony Optimization"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::PopulationBased
    }

    fn validate(&self) -> Result<(), String> {
        AcoConfig::validate(self)
    }

    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution {
        let n = ctx.jobs();
        let mut pheromones = PheromoneMatrix::new(n, self.initial_pheromone);
        // Deposits are scaled so that a sequence meeting the lower bound adds 1.0
        let scale = lower_bound(ctx.instance).max(1) as f64;
        let mut weights = Vec::with_capacity(n);

        let mut best = run_round(self, &pheromones, &mut weights, ctx);
        reinforce(self, &mut pheromones, &best, scale);
        ctx.record(0, best.makespan);

        for iteration in 1..self.iterations {
            if ctx.should_stop() {
                break;
            }

            let round_best = run_round(self, &pheromones, &mut weights, ctx);
            reinforce(self, &mut pheromones, &round_best, scale);

            if round_best.makespan < best.makespan {
                best = round_best;
            }
            ctx.record(iteration, best.makespan);
        }

        best
    }
}

/// Lets every ant build a sequence and returns the best of the round.
fn run_round<R: Rng>(
    config: &AcoConfig,
    pheromones: &PheromoneMatrix,
    weights: &mut Vec<f64>,
    ctx: &mut SearchContext<'_, R>,
) -> Solution {
    let first = construct_ant(pheromones, config.pheromone_weight, weights, ctx.rng);
    let mut round_best = Solution::evaluated(first, &mut ctx.evaluator);

    for _ in 1..config.population {
        let sequence = construct_ant(pheromones, config.pheromone_weight, weights, ctx.rng);
        let makespan = ctx.evaluate(&sequence);
        if makespan < round_best.makespan {
            round_best = Solution::new(sequence, makespan);
        }
    }
    round_best
}

fn reinforce(
    config: &AcoConfig,
    pheromones: &mut PheromoneMatrix,
    round_best: &Solution,
    scale: f64,
) {
    pheromones.evaporate(config.evaporation_rate);
    pheromones.deposit(&round_best.sequence, scale / round_best.makespan.max(1) as f64);
}

/// Builds one sequence by roulette-wheel choice over `trail^weight`.
///
/// `weights` is scratch space reused across ants.
pub(crate) fn construct_ant<R: Rng>(
    pheromones: &PheromoneMatrix,
    pheromone_weight: f64,
    weights: &mut Vec<f64>,
    rng: &mut R,
) -> Vec<usize> {
    let n = pheromones.jobs();
    let mut unplaced: Vec<usize> = (0..n).collect();
    let mut sequence = Vec::with_capacity(n);
    let mut last = None;

    while !unplaced.is_empty() {
        weights.clear();
        weights.extend(
            unplaced
                .iter()
                .map(|&job| pheromones.trail(last, job).powf(pheromone_weight)),
        );
        let total: f64 = weights.iter().sum();

        let pick = if total > 0.0 && total.is_finite() {
            let mut target = rng.random_range(0.0..total);
            let mut pick = unplaced.len() - 1;
            for (i, &w) in weights.iter().enumerate() {
                if target < w {
                    pick = i;
                    break;
                }
                target -= w;
            }
            pick
        } else {
            rng.random_range(0..unplaced.len())
        };

        let job = unplaced.swap_remove(pick);
        sequence.push(job);
        last = Some(job);
    }

    sequence
}
