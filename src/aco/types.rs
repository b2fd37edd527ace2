//! Pheromone storage.

/// Smallest value a trail can decay to.
pub const PHEROMONE_FLOOR: f64 = 1e-6;

/// Pheromone on job adjacencies.
///
/// `trail(None, b)` is the desirability of starting a sequence with job
/// `b`; `trail(Some(a), b)` that of placing `b` directly after `a`.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    jobs: usize,
    /// `jobs + 1` rows of `jobs` entries; the last row is the start row.
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates a matrix with every trail set to `initial`.
    pub fn new(jobs: usize, initial: f64) -> Self {
        Self {
            jobs,
            values: vec![initial; (jobs + 1) * jobs],
        }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    fn index(&self, from: Option<usize>, to: usize) -> usize {
        from.unwrap_or(self.jobs) * self.jobs + to
    }

    pub fn trail(&self, from: Option<usize>, to: usize) -> f64 {
        self.values[self.index(from, to)]
    }

    /// Multiplies every trail by `1 - rate`, never going below
    /// [`PHEROMONE_FLOOR`].
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for value in &mut self.values {
            *value = (*value * keep).max(PHEROMONE_FLOOR);
        }
    }

    /// Adds `amount` to every edge used by `sequence`, including the edge
    /// from the start row to its first job.
    pub fn deposit(&mut self, sequence: &[usize], amount: f64) {
        let mut previous = None;
        for &job in sequence {
            let idx = self.index(previous, job);
            self.values[idx] += amount;
            previous = Some(job);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_trails() {
        let tau = PheromoneMatrix::new(3, 1.0);
        assert_eq!(tau.jobs(), 3);
        assert_eq!(tau.trail(None, 2), 1.0);
        assert_eq!(tau.trail(Some(1), 0), 1.0);
    }

    #[test]
    fn test_evaporate_and_floor() {
        let mut tau = PheromoneMatrix::new(2, 1.0);
        tau.evaporate(0.5);
        assert!((tau.trail(Some(0), 1) - 0.5).abs() < 1e-12);
        for _ in 0..100 {
            tau.evaporate(0.9);
        }
        assert_eq!(tau.trail(Some(0), 1), PHEROMONE_FLOOR);
    }

    #[test]
    fn test_deposit_follows_sequence_edges() {
        let mut tau = PheromoneMatrix::new(3, 1.0);
        tau.deposit(&[2, 0, 1], 0.5);
        assert_eq!(tau.trail(None, 2), 1.5);
        assert_eq!(tau.trail(Some(2), 0), 1.5);
        assert_eq!(tau.trail(Some(0), 1), 1.5);
        // Untouched edges
        assert_eq!(tau.trail(None, 0), 1.0);
        assert_eq!(tau.trail(Some(0), 2), 1.0);
        assert_eq!(tau.trail(Some(1), 2), 1.0);
    }
}
