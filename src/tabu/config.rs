//! Tabu Search configuration.

use crate::driver::InitialSolution;
use crate::operators::Neighborhood;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_flowshop::tabu::TabuConfig;
/// use u_flowshop::Neighborhood;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(500)
///     .with_tabu_size(7)
///     .with_neighborhood(Neighborhood::Hybrid)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.tabu_size, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Number of recent moves kept in the tabu list.
    pub tabu_size: usize,
    /// Move structure. Swap, Insert or Hybrid.
    pub neighborhood: Neighborhood,
    /// Whether to use aspiration criterion (override tabu if the move
    /// produces a new global best).
    pub aspiration: bool,
    pub initial: InitialSolution,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tabu_size: 20,
            neighborhood: Neighborhood::Swap,
            aspiration: true,
            initial: InitialSolution::Neh,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list size.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
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
        if self.neighborhood == Neighborhood::TwoOpt {
            return Err("tabu search supports Swap, Insert or Hybrid neighborhoods".into());
        }
        Ok(())
    }
}
