//! ACO configuration.

/// Configuration for Ant Colony Optimization.
///
/// # Examples
///
/// ```
/// use u_flowshop::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_population(40)
///     .with_evaporation_rate(0.3);
/// assert_eq!(config.population, 40);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AcoConfig {
    /// Ants per round.
    pub population: usize,
    /// Number of construction rounds.
    pub iterations: usize,
    /// Exponent applied to pheromone trails during construction.
    pub pheromone_weight: f64,
    /// Fraction of every trail removed after each round.
    pub evaporation_rate: f64,
    /// Trail value every edge starts with.
    pub initial_pheromone: f64,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            population: 30,
            iterations: 100,
            pheromone_weight: 1.0,
            evaporation_rate: 0.5,
            initial_pheromone: 1.0,
        }
    }
}

impl AcoConfig {
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_pheromone_weight(mut self, weight: f64) -> Self {
        self.pheromone_weight = weight;
        self
    }

    /// Sets the evaporation rate, clamped to `[0.0, 1.0]`.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population == 0 {
            return Err("population must be at least 1".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if !self.pheromone_weight.is_finite() || self.pheromone_weight < 0.0 {
            return Err(format!(
                "pheromone_weight must be a non-negative number, got {}",
                self.pheromone_weight
            ));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(format!(
                "evaporation_rate must be in [0.0, 1.0), got {}",
                self.evaporation_rate
            ));
        }
        if self.initial_pheromone.is_nan() || self.initial_pheromone <= 0.0 {
            return Err("initial_pheromone must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AcoConfig::default();
        assert_eq!(config.population, 30);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.pheromone_weight, 1.0);
        assert_eq!(config.evaporation_rate, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(AcoConfig::default().with_population(0).validate().is_err());
        assert!(AcoConfig::default().with_iterations(0).validate().is_err());
        assert!(AcoConfig::default()
            .with_pheromone_weight(f64::NAN)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_evaporation_rate(1.0)
            .validate()
            .is_err());
    }
}
