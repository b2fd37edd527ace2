//! GA evolutionary loop.
//!
//! initialization → selection → crossover → mutation → evaluation →
//! generational replacement with one elite → repeat.

use super::config::GaConfig;
use crate::driver::{Driver, SearchContext, Solution, StrategyKind};
use crate::eval::Evaluator;
use crate::instance::Instance;
use crate::operators::{order_crossover, random_pair, random_permutation};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Driver for GaConfig {
    fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::PopulationBased
    }

    fn validate(&self) -> Result<(), String> {
        GaConfig::validate(self)
    }

    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution {
        let n = ctx.jobs();

        // 1. Initialize population
        let mut population: Vec<Solution> = (0..self.population_size)
            .map(|_| {
                let seq = random_permutation(n, ctx.rng);
                Solution::evaluated(seq, &mut ctx.evaluator)
            })
            .collect();

        let mut best = find_best(&population).clone();
        ctx.record(0, best.makespan);

        // 2. Evolutionary loop
        for gen in 1..=self.generations {
            if ctx.should_stop() {
                break;
            }

            // Best first; the elite is population[0]
            population.sort_by_key(|s| s.makespan);

            let offspring_count = self.population_size - 1;
            let mut offspring: Vec<Vec<usize>> = Vec::with_capacity(offspring_count);
            while offspring.len() < offspring_count {
                let p1 = self.selection.select(&population, ctx.rng);
                let p2 = self.selection.select(&population, ctx.rng);

                let mut child = if ctx.rng.random_range(0.0..1.0) < self.crossover_rate {
                    order_crossover(&population[p1].sequence, &population[p2].sequence, ctx.rng)
                } else {
                    population[p1].sequence.clone()
                };

                if ctx.rng.random_range(0.0..1.0) < self.mutation_rate {
                    let (i, j) = random_pair(n, ctx.rng);
                    child.swap(i, j);
                }

                offspring.push(child);
            }

            let mut next_gen = Vec::with_capacity(self.population_size);
            next_gen.push(population.swap_remove(0));
            next_gen.extend(evaluate_offspring(
                ctx.instance,
                &mut ctx.evaluator,
                offspring,
                self.parallel,
            ));
            population = next_gen;

            let gen_best = find_best(&population);
            if gen_best.makespan < best.makespan {
                best = gen_best.clone();
            }

            ctx.record(gen, best.makespan);
        }

        best
    }
}

/// Evaluate new individuals, in parallel when enabled.
#[cfg(feature = "parallel")]
fn evaluate_offspring(
    instance: &Instance,
    evaluator: &mut Evaluator<'_>,
    offspring: Vec<Vec<usize>>,
    parallel: bool,
) -> Vec<Solution> {
    if parallel {
        offspring
            .into_par_iter()
            .map_init(
                || Evaluator::new(instance),
                |ev, seq| Solution::evaluated(seq, ev),
            )
            .collect()
    } else {
        offspring
            .into_iter()
            .map(|seq| Solution::evaluated(seq, evaluator))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_offspring(
    _instance: &Instance,
    evaluator: &mut Evaluator<'_>,
    offspring: Vec<Vec<usize>>,
    _parallel: bool,
) -> Vec<Solution> {
    offspring
        .into_iter()
        .map(|seq| Solution::evaluated(seq, evaluator))
        .collect()
}

/// Find the individual with the lowest makespan.
fn find_best(population: &[Solution]) -> &Solution {
    population
        .iter()
        .min_by_key(|s| s.makespan)
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{execute, RunControl};
    use crate::error::FlowshopError;
    use crate::eval::evaluate;
    use crate::ga::Selection;
    use crate::operators::is_permutation;
    use crate::random::create_rng;

    fn instance_15x5() -> Instance {
        let times = (0..15)
            .map(|j| (0..5).map(|m| ((j * 31 + m * 19 + 7) % 97 + 1) as u64).collect())
            .collect();
        Instance::new("15x5", times).unwrap()
    }

    #[test]
    fn test_ga_empty_population_is_rejected() {
        let inst = instance_15x5();
        let config = GaConfig::default().with_population_size(0);
        let err = execute(&config, &inst, &mut create_rng(1), &RunControl::new()).unwrap_err();
        assert!(matches!(err, FlowshopError::InvalidParameter { .. }));
    }

    #[test]
    fn test_ga_all_selection_methods() {
        let inst = instance_15x5();
        for selection in [Selection::Tournament(3), Selection::Roulette, Selection::Rank] {
            let config = GaConfig::default()
                .with_selection(selection)
                .with_population_size(20)
                .with_generations(30);
            let mut rng = create_rng(42);
            let outcome = execute(&config, &inst, &mut rng, &RunControl::new()).unwrap();
            let sol = &outcome.solution;
            assert!(is_permutation(&sol.sequence, 15));
            assert_eq!(sol.makespan, evaluate(&inst, &sol.sequence).makespan);
            assert_eq!(outcome.convergence.len(), 31);
        }
    }

    #[test]
    fn test_ga_elitism_non_increasing() {
        let inst = instance_15x5();
        let config = GaConfig::default().with_generations(50);
        let mut rng = create_rng(7);
        let outcome = execute(&config, &inst, &mut rng, &RunControl::new()).unwrap();
        for window in outcome.convergence.windows(2) {
            assert!(
                window[1].makespan <= window[0].makespan,
                "best makespan should be non-increasing: {} > {}",
                window[1].makespan,
                window[0].makespan
            );
        }
    }

    #[test]
    fn test_ga_improves_on_initial_population() {
        let inst = instance_15x5();
        let config = GaConfig::default().with_generations(100);
        let mut rng = create_rng(42);
        let outcome = execute(&config, &inst, &mut rng, &RunControl::new()).unwrap();
        let first = outcome.convergence.first().unwrap().makespan;
        assert!(outcome.solution.makespan as f64 <= first);
    }

    #[test]
    fn test_ga_reproducible_with_seed() {
        let inst = instance_15x5();
        let config = GaConfig::default()
            .with_population_size(16)
            .with_generations(20);
        let a = execute(&config, &inst, &mut create_rng(11), &RunControl::new()).unwrap();
        let b = execute(&config, &inst, &mut create_rng(11), &RunControl::new()).unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.convergence, b.convergence);
    }

    #[test]
    fn test_ga_serial_and_parallel_agree() {
        let inst = instance_15x5();
        let config = GaConfig::default()
            .with_population_size(16)
            .with_generations(10);
        let parallel = execute(&config, &inst, &mut create_rng(3), &RunControl::new()).unwrap();
        let serial = execute(
            &config.clone().with_parallel(false),
            &inst,
            &mut create_rng(3),
            &RunControl::new(),
        )
        .unwrap();
        assert_eq!(parallel.solution, serial.solution);
    }

    #[test]
    fn test_ga_no_crossover_no_mutation_keeps_elite() {
        let inst = instance_15x5();
        let config = GaConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0)
            .with_generations(10);
        let mut rng = create_rng(5);
        let outcome = execute(&config, &inst, &mut rng, &RunControl::new()).unwrap();
        assert_eq!(
            outcome.convergence.first().unwrap().makespan,
            outcome.solution.makespan as f64,
        );
    }
}
