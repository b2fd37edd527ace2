//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_flowshop::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_flowshop::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(120)
///     .with_selection(Selection::Tournament(5))
///     .with_mutation_rate(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Larger populations increase diversity but slow down each generation.
    pub population_size: usize,

    /// Number of generations.
    pub generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Probability of applying order crossover to a pair of parents.
    ///
    /// When crossover is not applied, a clone of the first parent is used.
    pub crossover_rate: f64,

    /// Probability of applying a swap mutation to an offspring.
    pub mutation_rate: f64,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` crate feature.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            selection: Selection::default(),
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            parallel: true,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err("tournament size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 100);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert!(config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_generations(500)
            .with_selection(Selection::Rank)
            .with_crossover_rate(0.6)
            .with_mutation_rate(0.05)
            .with_parallel(false);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.generations, 500);
        assert_eq!(config.selection, Selection::Rank);
        assert!((config.crossover_rate - 0.6).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!(!config.parallel);
    }

    #[test]
    fn test_rates_clamped_by_builder() {
        let config = GaConfig::default()
            .with_crossover_rate(1.7)
            .with_mutation_rate(-0.3);
        assert!((config.crossover_rate - 1.0).abs() < 1e-10);
        assert!(config.mutation_rate.abs() < 1e-10);
    }

    #[test]
    fn test_validate() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_generations(0).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }

    #[test]
    fn test_tournament_size_builder() {
        let config = GaConfig::default().with_tournament_size(7);
        assert_eq!(config.selection, Selection::Tournament(7));
    }
}
