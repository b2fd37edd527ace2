//! PSO execution loop.
//!
//! Velocity update per dimension:
//!
//! ```text
//! v' = w·v + c1·r1·(pbest - x) + c2·r2·(gbest - x)
//! x' = x + v'
//! ```
//!
//! with `r1, r2` drawn uniformly from `[0, 1]` for every dimension and
//! `v'` clamped to `±velocity_max`.

use super::config::PsoConfig;
use super::types::{decode_spv, Particle};
use crate::driver::{Driver, SearchContext, Solution, StrategyKind};
use rand::Rng;

impl Driver for PsoConfig {
    fn name(&self) -> &'static str {
        "Particle Swarm Optimization"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::PopulationBased
    }

    fn validate(&self) -> Result<(), String> {
        PsoConfig::validate(self)
    }

    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution {
        let n = ctx.jobs();

        let mut swarm: Vec<Particle> = (0..self.population)
            .map(|_| Particle::random(n, self.position_max, self.velocity_max, ctx.rng))
            .collect();

        let mut global_position = Vec::new();
        let mut best = Solution::new(Vec::new(), u64::MAX);
        for particle in &mut swarm {
            let sequence = decode_spv(&particle.position);
            let makespan = ctx.evaluate(&sequence);
            particle.best_makespan = makespan;
            if makespan < best.makespan {
                global_position.clone_from(&particle.position);
                best = Solution::new(sequence, makespan);
            }
        }
        ctx.record(0, best.makespan);

        for iteration in 1..self.iterations {
            if ctx.should_stop() {
                break;
            }

            for particle in &mut swarm {
                self.step(particle, &global_position, ctx.rng);

                let sequence = decode_spv(&particle.position);
                let makespan = ctx.evaluate(&sequence);
                if makespan < particle.best_makespan {
                    particle.best_makespan = makespan;
                    particle.best_position.clone_from(&particle.position);
                }
                if makespan < best.makespan {
                    global_position.clone_from(&particle.position);
                    best = Solution::new(sequence, makespan);
                }
            }

            ctx.record(iteration, best.makespan);
        }

        best
    }
}

impl PsoConfig {
    /// Moves one particle towards its own and the swarm's best positions.
    fn step<R: Rng>(&self, particle: &mut Particle, global: &[f64], rng: &mut R) {
        let vmax = self.velocity_max;
        for d in 0..particle.position.len() {
            let x = particle.position[d];
            let r1: f64 = rng.random_range(0.0..=1.0);
            let r2: f64 = rng.random_range(0.0..=1.0);
            let v = self.inertia * particle.velocity[d]
                + self.cognitive * r1 * (particle.best_position[d] - x)
                + self.social * r2 * (global[d] - x);
            let v = v.clamp(-vmax, vmax);
            particle.velocity[d] = v;
            particle.position[d] = x + v;
        }
    }
}
