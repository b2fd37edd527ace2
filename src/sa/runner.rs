//! SA execution loop.

use super::config::{SaConfig, SaMove, MIN_TEMPERATURE};
use crate::driver::{Driver, SearchContext, Solution, StrategyKind};
use crate::operators::{insert, random_pair, scramble};
use rand::Rng;

impl Driver for SaConfig {
    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::NeighborhoodSearch
    }

    fn validate(&self) -> Result<(), String> {
        SaConfig::validate(self)
    }

    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution {
        let mut current = ctx.initial_solution(self.initial);
        let mut best = current.clone();
        ctx.record(0, best.makespan);

        let mut temperature = self.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut neighbor = current.sequence.clone();

        for iteration in 1..=self.max_iterations {
            if temperature < MIN_TEMPERATURE || ctx.should_stop() {
                break;
            }

            neighbor.clone_from(&current.sequence);
            apply_random_move(&mut neighbor, self.neighborhood, ctx.rng);
            let neighbor_cost = ctx.evaluate(&neighbor);
            let delta = neighbor_cost as f64 - current.makespan as f64;

            // Metropolis acceptance criterion
            let accept = if delta <= 0.0 {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                true
            } else {
                let probability = (-delta / temperature).exp();
                ctx.rng.random_range(0.0..1.0) < probability
            };

            if accept {
                std::mem::swap(&mut current.sequence, &mut neighbor);
                current.makespan = neighbor_cost;
                accepted_moves += 1;

                if current.makespan < best.makespan {
                    best = current.clone();
                }
            }

            ctx.record(iteration, best.makespan);
            temperature *= self.cooling_rate;
        }

        log::debug!(
            "SA accepted {accepted_moves} moves ({improving_moves} improving), \
             final temperature {temperature:.4}"
        );
        best
    }
}

fn apply_random_move<R: Rng>(seq: &mut Vec<usize>, kind: SaMove, rng: &mut R) {
    let (i, j) = random_pair(seq.len(), rng);
    match kind {
        SaMove::Swap => seq.swap(i, j),
        SaMove::Insert => {
            if rng.random_bool(0.5) {
                insert(seq, i, j);
            } else {
                insert(seq, j, i);
            }
        }
        SaMove::Scramble => scramble(seq, i, j, rng),
    }
}
