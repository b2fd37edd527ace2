//! SA configuration.

use crate::driver::InitialSolution;
use serde::{Deserialize, Serialize};

/// The run stops once the temperature drops below this floor.
pub const MIN_TEMPERATURE: f64 = 1e-3;

/// Random move drawn at each SA iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaMove {
    /// Exchange two random positions.
    #[default]
    Swap,
    /// Move a random job to a random position.
    Insert,
    /// Shuffle a random segment.
    Scramble,
}

/// Configuration for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use u_flowshop::sa::{SaConfig, SaMove};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(800.0)
///     .with_cooling_rate(0.98)
///     .with_neighborhood(SaMove::Insert)
///     .with_max_iterations(2000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = cooling_rate * T_k`.
    pub cooling_rate: f64,

    /// Maximum number of iterations (one neighbour each).
    pub max_iterations: usize,

    pub neighborhood: SaMove,

    pub initial: InitialSolution,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 500.0,
            cooling_rate: 0.95,
            max_iterations: 1000,
            neighborhood: SaMove::Swap,
            initial: InitialSolution::Neh,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: SaMove) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_initial(mut self, initial: InitialSolution) -> Self {
        self.initial = initial;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature.is_nan() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        let rate = self.cooling_rate;
        if rate.is_nan() || rate <= 0.0 || rate >= 1.0 {
            return Err(format!("cooling_rate must be in (0, 1), got {rate}"));
        }
        Ok(())
    }
}
