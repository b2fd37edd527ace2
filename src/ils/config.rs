//! ILS configuration.

use crate::driver::InitialSolution;
use crate::operators::Neighborhood;
use serde::{Deserialize, Serialize};

/// Perturbation strength, applied as a number of random swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Perturbation {
    /// 1 swap.
    #[default]
    Low,
    /// 3 swaps.
    Medium,
    /// 6 swaps.
    High,
}

impl Perturbation {
    pub fn swaps(self) -> usize {
        match self {
            Perturbation::Low => 1,
            Perturbation::Medium => 3,
            Perturbation::High => 6,
        }
    }
}

/// Acceptance criterion for the re-optimised candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Acceptance {
    /// Replace the incumbent only on strict improvement.
    #[default]
    Better,
    /// Always replace the incumbent.
    Always,
    /// Metropolis test at a constant temperature.
    TemperatureBased,
}

/// Configuration for Iterated Local Search.
///
/// # Temperature
///
/// With [`Acceptance::TemperatureBased`], the constant temperature is
/// `temperature_factor * Σp / (n * m * 10)` (Ruiz & Stützle, 2007).
///
/// # Examples
///
/// ```
/// use u_flowshop::ils::{Acceptance, IlsConfig, Perturbation};
///
/// let config = IlsConfig::default()
///     .with_perturbation(Perturbation::Medium)
///     .with_acceptance(Acceptance::TemperatureBased)
///     .with_max_iterations(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IlsConfig {
    pub perturbation: Perturbation,

    /// Number of perturbation rounds.
    pub max_iterations: usize,

    pub acceptance: Acceptance,

    /// Neighbourhood of the inner descent.
    pub neighborhood: Neighborhood,

    /// Improving-move budget of each inner descent.
    pub local_search_iterations: usize,

    /// Scale of the constant acceptance temperature.
    pub temperature_factor: f64,

    pub initial: InitialSolution,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            perturbation: Perturbation::Low,
            max_iterations: 100,
            acceptance: Acceptance::Better,
            neighborhood: Neighborhood::Insert,
            local_search_iterations: 100,
            temperature_factor: 0.4,
            initial: InitialSolution::Neh,
        }
    }
}

impl IlsConfig {
    pub fn with_perturbation(mut self, perturbation: Perturbation) -> Self {
        self.perturbation = perturbation;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_local_search_iterations(mut self, n: usize) -> Self {
        self.local_search_iterations = n;
        self
    }

    pub fn with_temperature_factor(mut self, factor: f64) -> Self {
        self.temperature_factor = factor;
        self
    }

    pub fn with_initial(mut self, initial: InitialSolution) -> Self {
        self.initial = initial;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.local_search_iterations == 0 {
            return Err("local_search_iterations must be at least 1".into());
        }
        if self.neighborhood == Neighborhood::Hybrid {
            return Err("inner descent supports Swap, Insert or 2-opt neighborhoods".into());
        }
        if self.temperature_factor.is_nan() || self.temperature_factor <= 0.0 {
            return Err(format!(
                "temperature_factor must be positive, got {}",
                self.temperature_factor
            ));
        }
        Ok(())
    }
}
