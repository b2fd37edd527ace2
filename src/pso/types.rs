//! Particle state and position decoding.

use rand::Rng;

/// One member of the swarm.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    /// Best position this particle has visited.
    pub best_position: Vec<f64>,
    pub best_makespan: u64,
}

impl Particle {
    /// Random particle with coordinates in `[0, position_max]` and
    /// velocities in `[-velocity_max, velocity_max]`.
    pub fn random<R: Rng>(dims: usize, position_max: f64, velocity_max: f64, rng: &mut R) -> Self {
        let position: Vec<f64> = (0..dims).map(|_| rng.random_range(0.0..=position_max)).collect();
        let velocity = (0..dims)
            .map(|_| rng.random_range(-velocity_max..=velocity_max))
            .collect();
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_makespan: u64::MAX,
        }
    }
}

/// Smallest position value decoding.
///
/// Returns job indices sorted by ascending coordinate; equal coordinates
/// keep the lower job index first.
///
/// ```
/// use u_flowshop::pso::decode_spv;
///
/// assert_eq!(decode_spv(&[2.5, 0.1, 1.7, 0.1]), vec![1, 3, 2, 0]);
/// ```
pub fn decode_spv(position: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..position.len()).collect();
    order.sort_by(|&a, &b| position[a].total_cmp(&position[b]));
    order
}
