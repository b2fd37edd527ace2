//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial solution
//! 2. At each iteration:
//!    a. Evaluate the whole neighbourhood
//!    b. Select the best non-tabu move (or tabu move satisfying aspiration)
//!    c. Apply the move, push its inverse onto the tabu list
//!    d. Update global best if improved
//! 3. Terminate after `max_iterations`

use super::config::TabuConfig;
use super::types::TabuList;
use crate::driver::{Driver, SearchContext, Solution, StrategyKind};
use crate::operators::Move;
use rand::Rng;

impl Driver for TabuConfig {
    fn name(&self) -> &'static str {
        "Tabu Search"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::NeighborhoodSearch
    }

    fn validate(&self) -> Result<(), String> {
        TabuConfig::validate(self)
    }

    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution {
        let moves = self.neighborhood.moves(ctx.jobs());

        let mut current = ctx.initial_solution(self.initial);
        let mut best = current.clone();
        let mut best_iteration = 0;
        ctx.record(0, best.makespan);

        let mut tabu = TabuList::new(self.tabu_size);

        for iteration in 1..=self.max_iterations {
            if ctx.should_stop() {
                break;
            }

            let aspiration_level = self.aspiration.then_some(best.makespan);
            let Some((mv, cost)) =
                select_move(ctx, &mut current.sequence, &moves, &tabu, aspiration_level)
            else {
                break;
            };

            mv.apply(&mut current.sequence);
            current.makespan = cost;
            tabu.push(mv.inverse());

            if current.makespan < best.makespan {
                best = current.clone();
                best_iteration = iteration;
            }

            ctx.record(iteration, best.makespan);
        }

        log::debug!("tabu search found its best at iteration {best_iteration}");
        best
    }
}

/// Picks the best admissible move from `sequence`.
///
/// A tabu move is admissible only when `aspiration_level` is set and the
/// move beats it. When nothing is admissible the least-bad move overall is
/// returned. `sequence` is left unchanged.
fn select_move<R: Rng>(
    ctx: &mut SearchContext<'_, R>,
    sequence: &mut Vec<usize>,
    moves: &[Move],
    tabu: &TabuList,
    aspiration_level: Option<u64>,
) -> Option<(Move, u64)> {
    let mut best_move: Option<(Move, u64)> = None;
    let mut fallback: Option<(Move, u64)> = None;

    for mv in moves {
        mv.apply(sequence);
        let cost = ctx.evaluate(sequence);
        mv.inverse().apply(sequence);

        if fallback.map_or(true, |(_, c)| cost < c) {
            fallback = Some((*mv, cost));
        }

        if tabu.contains(mv) && !aspiration_level.is_some_and(|level| cost < level) {
            continue;
        }

        if best_move.map_or(true, |(_, c)| cost < c) {
            best_move = Some((*mv, cost));
        }
    }

    best_move.or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{execute, InitialSolution, RunControl};
    use crate::eval::evaluate;
    use crate::instance::Instance;
    use crate::operators::{is_permutation, Neighborhood};
    use crate::random::create_rng;

    fn instance_9x4() -> Instance {
        let times = (0..9)
            .map(|j| (0..4).map(|m| ((j * 41 + m * 23 + j * m * 3) % 70 + 3) as u64).collect())
            .collect();
        Instance::new("9x4", times).unwrap()
    }

    /// Exhaustive optimum over all permutations (small n only).
    fn brute_force(inst: &Instance) -> u64 {
        fn rec(inst: &Instance, seq: &mut Vec<usize>, used: &mut Vec<bool>, best: &mut u64) {
            if seq.len() == inst.jobs() {
                *best = (*best).min(evaluate(inst, seq).makespan);
                return;
            }
            for j in 0..inst.jobs() {
                if !used[j] {
                    used[j] = true;
                    seq.push(j);
                    rec(inst, seq, used, best);
                    seq.pop();
                    used[j] = false;
                }
            }
        }
        let mut best = u64::MAX;
        rec(inst, &mut Vec::new(), &mut vec![false; inst.jobs()], &mut best);
        best
    }

    #[test]
    fn test_tabu_all_neighborhoods_valid() {
        let inst = instance_9x4();
        for nb in [Neighborhood::Swap, Neighborhood::Insert, Neighborhood::Hybrid] {
            let config = TabuConfig::default()
                .with_neighborhood(nb)
                .with_max_iterations(50);
            let mut rng = create_rng(42);
            let outcome = execute(&config, &inst, &mut rng, &RunControl::new()).unwrap();
            let sol = &outcome.solution;
            assert!(is_permutation(&sol.sequence, 9));
            assert_eq!(sol.makespan, evaluate(&inst, &sol.sequence).makespan);
            assert_eq!(outcome.convergence.len(), 51);
        }
    }

    #[test]
    fn test_tabu_cost_history_non_increasing() {
        let inst = instance_9x4();
        let config = TabuConfig::default()
            .with_initial(InitialSolution::Random)
            .with_tabu_size(5);
        let mut rng = create_rng(42);
        let outcome = execute(&config, &inst, &mut rng, &RunControl::new()).unwrap();

        for window in outcome.convergence.windows(2) {
            assert!(
                window[1].makespan <= window[0].makespan,
                "best makespan history should be non-increasing: {} > {}",
                window[1].makespan,
                window[0].makespan
            );
        }
    }

    #[test]
    fn test_tabu_near_optimum_on_small_instance() {
        let inst = Instance::new(
            "6x3",
            vec![
                vec![5, 9, 8],
                vec![9, 3, 10],
                vec![9, 4, 5],
                vec![4, 8, 8],
                vec![3, 5, 6],
                vec![7, 2, 9],
            ],
        )
        .unwrap();
        let optimum = brute_force(&inst);
        let config = TabuConfig::default()
            .with_neighborhood(Neighborhood::Hybrid)
            .with_tabu_size(5)
            .with_max_iterations(300);
        let mut rng = create_rng(1);
        let outcome = execute(&config, &inst, &mut rng, &RunControl::new()).unwrap();
        assert!(outcome.solution.makespan >= optimum);
        assert!(
            outcome.solution.makespan as f64 <= optimum as f64 * 1.10,
            "tabu {} vs optimum {optimum}",
            outcome.solution.makespan
        );
    }

    #[test]
    fn test_tabu_keeps_moving_past_local_optimum() {
        // With aspiration off and a large tenure the search must still make
        // a move every iteration, so it runs the full budget.
        let inst = instance_9x4();
        let config = TabuConfig::default()
            .with_aspiration(false)
            .with_tabu_size(50)
            .with_max_iterations(80);
        let mut rng = create_rng(4);
        let outcome = execute(&config, &inst, &mut rng, &RunControl::new()).unwrap();
        assert_eq!(outcome.iterations, 80);
    }

    fn toy() -> Instance {
        Instance::new("toy", vec![vec![2, 3], vec![4, 1], vec![1, 5]]).unwrap()
    }

    #[test]
    fn test_aspiration_admits_improving_tabu_move() {
        // From [0, 1, 2] (makespan 12): swap(0,1) -> 14, swap(0,2) -> 10, swap(1,2) -> 11
        let inst = toy();
        let control = RunControl::new();
        let mut rng = create_rng(0);
        let mut ctx = SearchContext::new(&inst, &mut rng, &control);
        let moves = Neighborhood::Swap.moves(3);
        let mut tabu = TabuList::new(3);
        tabu.push(Move::Swap(0, 2));
        let mut sequence = vec![0, 1, 2];

        let with = select_move(&mut ctx, &mut sequence, &moves, &tabu, Some(12));
        assert_eq!(with, Some((Move::Swap(0, 2), 10)));

        let without = select_move(&mut ctx, &mut sequence, &moves, &tabu, None);
        assert_eq!(without, Some((Move::Swap(1, 2), 11)));
        assert_eq!(sequence, vec![0, 1, 2]);
    }

    #[test]
    fn test_aspiration_requires_beating_the_best() {
        let inst = toy();
        let control = RunControl::new();
        let mut rng = create_rng(0);
        let mut ctx = SearchContext::new(&inst, &mut rng, &control);
        let moves = Neighborhood::Swap.moves(3);
        let mut tabu = TabuList::new(3);
        tabu.push(Move::Swap(0, 2));
        let mut sequence = vec![0, 1, 2];

        let chosen = select_move(&mut ctx, &mut sequence, &moves, &tabu, Some(10));
        assert_eq!(chosen, Some((Move::Swap(1, 2), 11)));
    }

    #[test]
    fn test_all_tabu_falls_back_to_least_bad() {
        let inst = toy();
        let control = RunControl::new();
        let mut rng = create_rng(0);
        let mut ctx = SearchContext::new(&inst, &mut rng, &control);
        let moves = Neighborhood::Swap.moves(3);
        let mut tabu = TabuList::new(3);
        for mv in &moves {
            tabu.push(*mv);
        }
        let mut sequence = vec![0, 1, 2];

        let chosen = select_move(&mut ctx, &mut sequence, &moves, &tabu, None);
        assert_eq!(chosen, Some((Move::Swap(0, 2), 10)));
    }

    #[test]
    fn test_tabu_deterministic_from_neh() {
        // No random draws when starting from NEH.
        let inst = instance_9x4();
        let config = TabuConfig::default().with_max_iterations(40);
        let a = execute(&config, &inst, &mut create_rng(1), &RunControl::new()).unwrap();
        let b = execute(&config, &inst, &mut create_rng(2), &RunControl::new()).unwrap();
        assert_eq!(a.solution, b.solution);
    }
}
