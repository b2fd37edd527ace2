//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Different strategies provide different selection pressure.
//! All strategies minimise the makespan.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use crate::driver::Solution;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_flowshop::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Roulette wheel (inverse-makespan proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Tournament selection: pick `k` individuals at random, select the best.
    ///
    /// Higher `k` = stronger selection pressure.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Roulette wheel selection with weight `1 / makespan`.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Rank-based selection.
    ///
    /// The best individual gets weight `n`, the worst weight `1`. Avoids
    /// the scaling problems of roulette wheel selection.
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Solution], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

/// Tournament selection: pick k random individuals, return best.
fn tournament<R: Rng>(population: &[Solution], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].makespan < population[best_idx].makespan {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel selection with inverse-makespan weights.
fn roulette<R: Rng>(population: &[Solution], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    // A zero makespan only arises from all-zero rows; treat it as 1.
    let weights: Vec<f64> = population
        .iter()
        .map(|s| 1.0 / s.makespan.max(1) as f64)
        .collect();

    let total: f64 = weights.iter().sum();
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Rank-based selection using linear ranking.
fn rank<R: Rng>(population: &[Solution], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut indexed: Vec<(usize, u64)> = population
        .iter()
        .enumerate()
        .map(|(i, s)| (i, s.makespan))
        .collect();
    indexed.sort_by_key(|&(_, makespan)| makespan);

    // weight_i = n - rank_i
    let total = (n * (n + 1) / 2) as f64;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &(original_idx, _)) in indexed.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return original_idx;
        }
    }

    indexed[n - 1].0 // fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(makespans: &[u64]) -> Vec<Solution> {
        makespans
            .iter()
            .map(|&m| Solution::new(vec![0], m))
            .collect()
    }

    fn counts(selection: Selection, pop: &[Solution], n: usize) -> Vec<u32> {
        let mut rng = create_rng(42);
        let mut counts = vec![0u32; pop.len()];
        for _ in 0..n {
            counts[selection.select(pop, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[100, 50, 10, 80]);
        let counts = counts(Selection::Tournament(4), &pop, 10_000);
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[100, 50, 10, 80]);
        let counts = counts(Selection::Tournament(1), &pop, 10_000);
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(&[100, 50, 10, 80]);
        let counts = counts(Selection::Roulette, &pop, 10_000);
        assert!(
            counts[2] > counts[0],
            "best should be selected more often: {counts:?}"
        );
    }

    #[test]
    fn test_rank_favors_best() {
        let pop = make_population(&[100, 50, 10, 80]);
        let counts = counts(Selection::Rank, &pop, 10_000);
        assert!(
            counts[2] > counts[0],
            "best should be selected more: {counts:?}"
        );
    }

    #[test]
    fn test_zero_makespan_population() {
        let pop = make_population(&[0, 0, 0]);
        let counts = counts(Selection::Roulette, &pop, 3000);
        assert_eq!(counts.iter().sum::<u32>(), 3000);
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5]);
        let mut rng = create_rng(42);

        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&pop, &mut rng), 0);
        assert_eq!(Selection::Rank.select(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Solution> = vec![];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&pop, &mut rng);
    }
}
