//! Tabu list.

use crate::operators::Move;
use std::collections::VecDeque;

/// Fixed-capacity FIFO of forbidden moves.
///
/// When full, pushing a move evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct TabuList {
    moves: VecDeque<Move>,
    capacity: usize,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            moves: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    pub fn push(&mut self, mv: Move) {
        if self.capacity == 0 {
            return;
        }
        if self.moves.len() >= self.capacity {
            self.moves.pop_front();
        }
        self.moves.push_back(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
