//! PSO configuration.

/// Configuration for Particle Swarm Optimization.
///
/// # Examples
///
/// ```
/// use u_flowshop::pso::PsoConfig;
///
/// let config = PsoConfig::default().with_inertia(0.5).with_social(2.0);
/// assert_eq!(config.population, 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PsoConfig {
    /// Number of particles.
    pub population: usize,
    /// Number of swarm updates.
    pub iterations: usize,
    /// Weight of the previous velocity.
    pub inertia: f64,
    /// Pull towards the particle's own best position.
    pub cognitive: f64,
    /// Pull towards the swarm's best position.
    pub social: f64,
    /// Upper bound of the initial coordinates (lower bound is 0).
    pub position_max: f64,
    /// Velocity components are clamped to `[-velocity_max, velocity_max]`.
    pub velocity_max: f64,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            population: 30,
            iterations: 100,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            position_max: 4.0,
            velocity_max: 4.0,
        }
    }
}

impl PsoConfig {
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    pub fn with_cognitive(mut self, cognitive: f64) -> Self {
        self.cognitive = cognitive;
        self
    }

    pub fn with_social(mut self, social: f64) -> Self {
        self.social = social;
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
        for (key, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{key} must be a non-negative number, got {value}"));
            }
        }
        if self.position_max.is_nan() || self.position_max <= 0.0 {
            return Err("position_max must be positive".into());
        }
        if self.velocity_max.is_nan() || self.velocity_max <= 0.0 {
            return Err("velocity_max must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PsoConfig::default();
        assert_eq!(config.iterations, 100);
        assert_eq!(config.inertia, 0.7);
        assert_eq!(config.cognitive, 1.5);
        assert_eq!(config.social, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(PsoConfig::default().with_population(0).validate().is_err());
        assert!(PsoConfig::default().with_inertia(-0.1).validate().is_err());
        assert!(PsoConfig::default()
            .with_social(f64::INFINITY)
            .validate()
            .is_err());
    }
}
