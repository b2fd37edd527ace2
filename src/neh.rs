//! NEH constructive heuristic.
//!
//! 1. Sort jobs by decreasing total processing time (ties: lower index first)
//! 2. Order the first two jobs to minimise their partial makespan
//! 3. Insert each remaining job at the position giving the smallest partial
//!    makespan (ties: earliest position)
//!
//! Deterministic; no random numbers are drawn.
//!
//! # Reference
//!
//! Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//! n-job flow-shop sequencing problem", *Omega* 11(1), 91-95.

use crate::driver::{Driver, SearchContext, Solution, StrategyKind};
use crate::eval::Evaluator;
use rand::Rng;
use std::cmp::Reverse;

/// The NEH heuristic. It has no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NehConfig;

impl Driver for NehConfig {
    fn name(&self) -> &'static str {
        "NEH Heuristic"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::ConstructOnce
    }

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    fn search<R: Rng>(&self, ctx: &mut SearchContext<'_, R>) -> Solution {
        let solution = construct(&mut ctx.evaluator);
        ctx.record(0, solution.makespan);
        solution
    }
}

/// Builds the NEH sequence for the evaluator's instance.
pub fn construct(evaluator: &mut Evaluator<'_>) -> Solution {
    let instance = evaluator.instance();
    let n = instance.jobs();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&job| Reverse(instance.total_time(job)));

    if n < 2 {
        return Solution::evaluated(order, evaluator);
    }

    let (a, b) = (order[0], order[1]);
    let ab = evaluator.makespan(&[a, b]);
    let ba = evaluator.makespan(&[b, a]);
    let mut seq = Vec::with_capacity(n);
    let mut makespan = if ba < ab {
        seq.extend([b, a]);
        ba
    } else {
        seq.extend([a, b]);
        ab
    };

    for &job in &order[2..] {
        // Slide the job from the front to the back, evaluating each slot.
        seq.insert(0, job);
        let last = seq.len() - 1;
        let mut best_pos = 0;
        let mut best = u64::MAX;
        for pos in 0..=last {
            let ms = evaluator.makespan(&seq);
            if ms < best {
                best = ms;
                best_pos = pos;
            }
            if pos < last {
                seq.swap(pos, pos + 1);
            }
        }
        seq.pop();
        seq.insert(best_pos, job);
        makespan = best;
    }

    Solution::new(seq, makespan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{execute, RunControl};
    use crate::eval::evaluate;
    use crate::instance::Instance;
    use crate::operators::{is_permutation, Neighborhood};
    use crate::random::create_rng;

    fn toy() -> Instance {
        Instance::new("toy", vec![vec![2, 3], vec![4, 1], vec![1, 5]]).unwrap()
    }

    #[test]
    fn test_neh_reference_scenario() {
        let inst = toy();
        let mut evaluator = Evaluator::new(&inst);
        let sol = construct(&mut evaluator);
        assert_eq!(sol.sequence, vec![2, 1, 0]);
        assert_eq!(sol.makespan, 10);
        assert!(sol.makespan <= evaluate(&inst, &[0, 1, 2]).makespan);

        for mv in Neighborhood::Swap.moves(3) {
            let mut neighbor = sol.sequence.clone();
            mv.apply(&mut neighbor);
            assert!(sol.makespan <= evaluator.makespan(&neighbor));
        }
    }

    #[test]
    fn test_neh_deterministic() {
        let inst = Instance::new(
            "5x3",
            vec![
                vec![5, 9, 8],
                vec![9, 3, 10],
                vec![9, 4, 5],
                vec![4, 8, 8],
                vec![3, 5, 6],
            ],
        )
        .unwrap();
        let first = construct(&mut Evaluator::new(&inst));
        for _ in 0..5 {
            assert_eq!(construct(&mut Evaluator::new(&inst)), first);
        }
        assert!(is_permutation(&first.sequence, 5));
        assert_eq!(first.makespan, evaluate(&inst, &first.sequence).makespan);
    }

    #[test]
    fn test_neh_single_job() {
        let inst = Instance::new("one", vec![vec![4, 2]]).unwrap();
        let sol = construct(&mut Evaluator::new(&inst));
        assert_eq!(sol.sequence, vec![0]);
        assert_eq!(sol.makespan, 6);
    }

    #[test]
    fn test_neh_driver_single_point() {
        let inst = toy();
        let mut rng = create_rng(0);
        let outcome = execute(&NehConfig, &inst, &mut rng, &RunControl::new()).unwrap();
        assert_eq!(outcome.convergence.len(), 1);
        assert_eq!(outcome.convergence[0].iteration, 0);
        assert_eq!(outcome.convergence[0].makespan, 10.0);
    }
}
