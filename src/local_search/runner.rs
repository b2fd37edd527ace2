//! Local search execution loop.

use super::config::LocalSearchConfig;
use crate::driver::{Driver, SearchContext, Solution, StrategyKind};
use crate::operators::{Move, Neighborhood};
use rand::Rng;

impl Driver for LocalSearchConfig {
    fn name(&self) -> &'static str {
        "Local Search"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::NeighborhoodSearch
    }

    fn validate(&self) -> Result<(), String> {
        LocalSearchConfig::validate(self)
    }

    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution {
        let start = ctx.initial_solution(self.initial);
        descend(ctx, start, self.neighborhood, self.max_iterations, true)
    }
}

/// Best-improvement descent from `start`.
///
/// Performs at most `max_steps` improving moves. With `trace` set, records
/// the starting makespan at iteration 0 and one point per improving move.
pub fn descend<R: Rng>(
    ctx: &mut SearchContext<'_, R>,
    start: Solution,
    neighborhood: Neighborhood,
    max_steps: usize,
    trace: bool,
) -> Solution {
    let moves = neighborhood.moves(start.sequence.len());
    let Solution {
        mut sequence,
        mut makespan,
    } = start;

    if trace {
        ctx.record(0, makespan);
    }

    for step in 1..=max_steps {
        if ctx.should_stop() {
            break;
        }

        // Apply, evaluate and undo each move in place.
        let mut best: Option<(Move, u64)> = None;
        for mv in &moves {
            mv.apply(&mut sequence);
            let cost = ctx.evaluate(&sequence);
            mv.inverse().apply(&mut sequence);
            if best.map_or(true, |(_, b)| cost < b) {
                best = Some((*mv, cost));
            }
        }

        match best {
            Some((mv, cost)) if cost < makespan => {
                mv.apply(&mut sequence);
                makespan = cost;
                if trace {
                    ctx.record(step, makespan);
                }
            }
            // Local optimum
            _ => break,
        }
    }

    Solution::new(sequence, makespan)
}
