//! Permutation move operators.
//!
//! All operators act on job sequences (`&[usize]` of 0-based job indices)
//! and keep them permutations of `0..n`. Sequences shorter than two jobs
//! are left unchanged.
//!
//! # Moves
//!
//! - [`swap`]: exchange two positions, O(1)
//! - [`insert`]: remove a job and reinsert it elsewhere, O(n)
//! - [`two_opt`]: reverse a segment, O(n)
//! - [`scramble`]: shuffle a segment, O(n)
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Taillard (1990), "Some efficient heuristic methods for the flow shop
//!   sequencing problem"

use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// Elementary moves
// ============================================================================

/// Exchanges positions `i` and `j`.
pub fn swap(seq: &mut [usize], i: usize, j: usize) {
    seq.swap(i, j);
}

/// Removes the job at `from` and reinserts it at position `to`.
///
/// `to` indexes the sequence after removal, so `insert(s, a, b)` is undone
/// by `insert(s, b, a)`.
pub fn insert(seq: &mut Vec<usize>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let job = seq.remove(from);
    seq.insert(to, job);
}

/// Reverses the segment between `i` and `j` inclusive.
pub fn two_opt(seq: &mut [usize], i: usize, j: usize) {
    let (lo, hi) = ordered(i, j);
    seq[lo..=hi].reverse();
}

/// Randomly permutes the segment between `i` and `j` inclusive.
pub fn scramble<R: Rng>(seq: &mut [usize], i: usize, j: usize, rng: &mut R) {
    let (lo, hi) = ordered(i, j);
    crate::random::shuffle(&mut seq[lo..=hi], rng);
}

/// A single neighbourhood move with positional attributes.
///
/// Moves are value types so they can be stored in a tabu list and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Exchange positions `(i, j)`, `i < j`.
    Swap(usize, usize),
    /// Move the job at `from` to `to`.
    Insert { from: usize, to: usize },
    /// Reverse positions `i..=j`, `i < j`.
    TwoOpt(usize, usize),
}

impl Move {
    /// Applies the move in place.
    pub fn apply(&self, seq: &mut Vec<usize>) {
        match *self {
            Move::Swap(i, j) => swap(seq, i, j),
            Move::Insert { from, to } => insert(seq, from, to),
            Move::TwoOpt(i, j) => two_opt(seq, i, j),
        }
    }

    /// The move that undoes this one.
    pub fn inverse(&self) -> Move {
        match *self {
            Move::Insert { from, to } => Move::Insert { from: to, to: from },
            other => other,
        }
    }
}

// ============================================================================
// Neighbourhoods
// ============================================================================

/// Neighbourhood structure used by the trajectory searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    Swap,
    Insert,
    TwoOpt,
    /// Swap and insertion moves together.
    Hybrid,
}

impl Neighborhood {
    /// Enumerates every move of this neighbourhood for a sequence of length `n`.
    ///
    /// Swap and 2-opt produce all `i < j` pairs; insertion produces all
    /// ordered `from != to` pairs.
    pub fn moves(self, n: usize) -> Vec<Move> {
        let mut moves = Vec::new();
        if matches!(self, Neighborhood::Swap | Neighborhood::Hybrid) {
            for i in 0..n {
                for j in (i + 1)..n {
                    moves.push(Move::Swap(i, j));
                }
            }
        }
        if matches!(self, Neighborhood::Insert | Neighborhood::Hybrid) {
            for from in 0..n {
                for to in (0..n).filter(|&to| to != from) {
                    moves.push(Move::Insert { from, to });
                }
            }
        }
        if self == Neighborhood::TwoOpt {
            for i in 0..n {
                for j in (i + 1)..n {
                    moves.push(Move::TwoOpt(i, j));
                }
            }
        }
        moves
    }

    /// Draws one random move of this neighbourhood. Requires `n >= 2`.
    pub fn random_move<R: Rng>(self, n: usize, rng: &mut R) -> Move {
        let (i, j) = random_pair(n, rng);
        match self {
            Neighborhood::Swap => Move::Swap(i, j),
            Neighborhood::TwoOpt => Move::TwoOpt(i, j),
            Neighborhood::Insert => random_insert(i, j, rng),
            Neighborhood::Hybrid => {
                if rng.random_bool(0.5) {
                    Move::Swap(i, j)
                } else {
                    random_insert(i, j, rng)
                }
            }
        }
    }
}

fn random_insert<R: Rng>(i: usize, j: usize, rng: &mut R) -> Move {
    if rng.random_bool(0.5) {
        Move::Insert { from: i, to: j }
    } else {
        Move::Insert { from: j, to: i }
    }
}

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing one child.
///
/// 1. Select a random segment `[start, end]` from `parent1`
/// 2. Copy it to the child at the same positions
/// 3. Fill the remaining positions with `parent2`'s jobs in their relative
///    order, starting after the segment and wrapping around, skipping jobs
///    already present
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n < 2 {
        return parent1.to_vec();
    }
    let (start, end) = random_pair(n, rng);
    order_crossover_segment(parent1, parent2, start, end)
}

/// OX with a fixed segment `[start, end]` taken from `template`.
pub fn order_crossover_segment(
    template: &[usize],
    donor: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let job = donor[(end + 1 + offset) % n];
        if !in_segment[job] {
            child[pos] = job;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Random helpers
// ============================================================================

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    crate::random::shuffle(&mut perm, rng);
    perm
}

/// Applies `swaps` random swaps of distinct positions.
pub fn perturb<R: Rng>(seq: &mut [usize], swaps: usize, rng: &mut R) {
    if seq.len() < 2 {
        return;
    }
    for _ in 0..swaps {
        let (i, j) = random_pair(seq.len(), rng);
        seq.swap(i, j);
    }
}

/// Two distinct positions `(i, j)` with `i < j`. Requires `n >= 2`.
pub fn random_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    ordered(a, b)
}

/// Whether `seq` is a permutation of `0..n`.
pub fn is_permutation(seq: &[usize], n: usize) -> bool {
    if seq.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &job in seq {
        if job >= n || seen[job] {
            return false;
        }
        seen[job] = true;
    }
    true
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_swap_and_insert() {
        let mut seq = vec![0, 1, 2, 3, 4];
        swap(&mut seq, 1, 3);
        assert_eq!(seq, vec![0, 3, 2, 1, 4]);

        let mut seq = vec![0, 1, 2, 3, 4];
        insert(&mut seq, 1, 3);
        assert_eq!(seq, vec![0, 2, 3, 1, 4]);
        insert(&mut seq, 3, 1);
        assert_eq!(seq, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_two_opt_reverses_inclusive_segment() {
        let mut seq = vec![0, 1, 2, 3, 4];
        two_opt(&mut seq, 3, 1);
        assert_eq!(seq, vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_scramble_only_touches_segment() {
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let mut seq: Vec<usize> = (0..10).collect();
            scramble(&mut seq, 2, 6, &mut rng);
            assert!(is_permutation(&seq, 10));
            assert_eq!(&seq[..2], &[0, 1]);
            assert_eq!(&seq[7..], &[7, 8, 9]);
        }
    }

    #[test]
    fn test_move_inverse_restores() {
        let original: Vec<usize> = (0..6).collect();
        for nb in [
            Neighborhood::Swap,
            Neighborhood::Insert,
            Neighborhood::TwoOpt,
            Neighborhood::Hybrid,
        ] {
            for mv in nb.moves(6) {
                let mut seq = original.clone();
                mv.apply(&mut seq);
                assert!(is_permutation(&seq, 6), "{mv:?} broke the permutation");
                mv.inverse().apply(&mut seq);
                assert_eq!(seq, original, "{mv:?} not undone by its inverse");
            }
        }
    }

    #[test]
    fn test_neighborhood_sizes() {
        assert_eq!(Neighborhood::Swap.moves(5).len(), 10);
        assert_eq!(Neighborhood::TwoOpt.moves(5).len(), 10);
        assert_eq!(Neighborhood::Insert.moves(5).len(), 20);
        assert_eq!(Neighborhood::Hybrid.moves(5).len(), 30);
        assert!(Neighborhood::Swap.moves(1).is_empty());
    }

    #[test]
    fn test_random_move_stays_in_bounds() {
        let mut rng = create_rng(3);
        for nb in [
            Neighborhood::Swap,
            Neighborhood::Insert,
            Neighborhood::TwoOpt,
            Neighborhood::Hybrid,
        ] {
            for _ in 0..200 {
                let mut seq: Vec<usize> = (0..7).collect();
                nb.random_move(7, &mut rng).apply(&mut seq);
                assert!(is_permutation(&seq, 7));
            }
        }
    }

    #[test]
    fn test_ox_keeps_segment_and_donor_order() {
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];
        let child = order_crossover_segment(&p1, &p2, 2, 4);
        assert_eq!(&child[2..=4], &[2, 3, 4]);
        assert_eq!(child, vec![6, 5, 2, 3, 4, 1, 0, 7]);
        assert!(is_permutation(&child, 8));
    }

    #[test]
    fn test_ox_random_children_valid() {
        let mut rng = create_rng(42);
        let p1: Vec<usize> = (0..12).collect();
        let p2 = random_permutation(12, &mut rng);
        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 12), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = create_rng(42);
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_perturb_and_random_pair() {
        let mut rng = create_rng(9);
        for _ in 0..500 {
            let (i, j) = random_pair(5, &mut rng);
            assert!(i < j && j < 5);
        }
        let mut seq: Vec<usize> = (0..10).collect();
        perturb(&mut seq, 6, &mut rng);
        assert!(is_permutation(&seq, 10));

        let mut single = vec![0];
        perturb(&mut single, 3, &mut rng);
        assert_eq!(single, vec![0]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }
}
