//! Local search configuration.

use crate::driver::InitialSolution;
use crate::operators::Neighborhood;

/// Configuration for best-improvement local search.
///
/// # Examples
///
/// ```
/// use u_flowshop::local_search::LocalSearchConfig;
/// use u_flowshop::Neighborhood;
///
/// let config = LocalSearchConfig::default()
///     .with_neighborhood(Neighborhood::Insert)
///     .with_max_iterations(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchConfig {
    /// Move structure. Swap, Insert or 2-opt.
    pub neighborhood: Neighborhood,

    /// Maximum number of improving moves.
    pub max_iterations: usize,

    /// Where the descent starts.
    pub initial: InitialSolution,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            neighborhood: Neighborhood::Swap,
            max_iterations: 100,
            initial: InitialSolution::Neh,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
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
        if self.neighborhood == Neighborhood::Hybrid {
            return Err("local search supports Swap, Insert or 2-opt neighborhoods".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.neighborhood, Neighborhood::Swap);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.initial, InitialSolution::Neh);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = LocalSearchConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_hybrid() {
        let config = LocalSearchConfig::default().with_neighborhood(Neighborhood::Hybrid);
        assert!(config.validate().is_err());
    }
}
