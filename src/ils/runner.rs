//! ILS execution loop.

use super::config::{Acceptance, IlsConfig};
use crate::driver::{Driver, SearchContext, Solution, StrategyKind};
use crate::local_search::descend;
use crate::operators::perturb;
use rand::Rng;

impl Driver for IlsConfig {
    fn name(&self) -> &'static str {
        "Iterated Local Search"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::NeighborhoodSearch
    }

    fn validate(&self) -> Result<(), String> {
        IlsConfig::validate(self)
    }

    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution {
        let temperature = acceptance_temperature(ctx, self.temperature_factor);

        let start = ctx.initial_solution(self.initial);
        let mut current = descend(
            ctx,
            start,
            self.neighborhood,
            self.local_search_iterations,
            false,
        );
        let mut best = current.clone();
        ctx.record(0, best.makespan);

        let mut accepted = 0usize;
        for round in 1..=self.max_iterations {
            if ctx.should_stop() {
                break;
            }

            let mut sequence = current.sequence.clone();
            perturb(&mut sequence, self.perturbation.swaps(), ctx.rng);
            let perturbed = Solution::evaluated(sequence, &mut ctx.evaluator);
            let candidate = descend(
                ctx,
                perturbed,
                self.neighborhood,
                self.local_search_iterations,
                false,
            );

            if candidate.makespan < best.makespan {
                best = candidate.clone();
            }

            let accept = match self.acceptance {
                Acceptance::Better => candidate.makespan < current.makespan,
                Acceptance::Always => true,
                Acceptance::TemperatureBased => {
                    if candidate.makespan <= current.makespan {
                        true
                    } else {
                        let delta = (candidate.makespan - current.makespan) as f64;
                        ctx.rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                    }
                }
            };
            if accept {
                current = candidate;
                accepted += 1;
            }

            ctx.record(round, best.makespan);
        }

        log::debug!("ILS accepted {accepted} of {} candidates", self.max_iterations);
        best
    }
}

/// Constant temperature `factor * Σp / (n * m * 10)`, never zero.
fn acceptance_temperature<R: Rng>(ctx: &SearchContext<'_, R>, factor: f64) -> f64 {
    let inst = ctx.instance;
    let scale = (inst.jobs() * inst.machines() * 10) as f64;
    (factor * inst.total_work() as f64 / scale).max(f64::MIN_POSITIVE)
}
