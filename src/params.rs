//! Parameter bag to typed configuration.
//!
//! Callers pass a loose `key → JSON value` map. [`AlgorithmConfig::from_parameters`]
//! reads the keys each algorithm recognises and builds its config once,
//! before any search starts:
//!
//! - missing keys take the algorithm's default
//! - numbers outside their documented range are clamped to the nearest
//!   bound and reported as a [`ParameterAdjustment`]
//! - fractional values for integer keys are rounded (also reported)
//! - wrong types and unknown labels fail with
//!   [`FlowshopError::InvalidParameter`]
//! - unrecognised keys are ignored

use crate::aco::AcoConfig;
use crate::dispatch::Algorithm;
use crate::driver::{execute, InitialSolution, Outcome, RunControl};
use crate::error::{FlowshopError, Result};
use crate::ga::{GaConfig, Selection};
use crate::ils::{Acceptance, IlsConfig, Perturbation};
use crate::instance::Instance;
use crate::local_search::LocalSearchConfig;
use crate::neh::NehConfig;
use crate::operators::Neighborhood;
use crate::pso::PsoConfig;
use crate::sa::{SaConfig, SaMove};
use crate::tabu::TabuConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Loosely-typed parameters as supplied by the caller.
pub type Parameters = BTreeMap<String, Value>;

/// A parameter value that was changed before the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterAdjustment {
    pub key: String,
    pub requested: Value,
    pub applied: Value,
}

/// Validated configuration for one of the algorithms.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmConfig {
    Neh(NehConfig),
    LocalSearch(LocalSearchConfig),
    Ils(IlsConfig),
    Sa(SaConfig),
    Ga(GaConfig),
    Tabu(TabuConfig),
    Aco(AcoConfig),
    Pso(PsoConfig),
}

impl AlgorithmConfig {
    /// Builds the configuration of `algorithm` from `params`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_flowshop::{Algorithm, AlgorithmConfig, Parameters};
    /// use serde_json::json;
    ///
    /// let mut params = Parameters::new();
    /// params.insert("cooling_rate".into(), json!(0.5));
    /// let (config, adjustments) =
    ///     AlgorithmConfig::from_parameters(Algorithm::SimulatedAnnealing, &params).unwrap();
    /// assert_eq!(config.algorithm(), Algorithm::SimulatedAnnealing);
    /// assert_eq!(adjustments[0].applied, json!(0.7));
    /// ```
    pub fn from_parameters(
        algorithm: Algorithm,
        params: &Parameters,
    ) -> Result<(Self, Vec<ParameterAdjustment>)> {
        let mut reader = Reader::new(params);

        let config = match algorithm {
            Algorithm::Neh => AlgorithmConfig::Neh(NehConfig),
            Algorithm::LocalSearch => {
                let config = LocalSearchConfig::default()
                    .with_neighborhood(reader.label(
                        "neighborhood_type",
                        DESCENT_MOVES,
                        Neighborhood::Swap,
                    )?)
                    .with_max_iterations(reader.integer("max_iterations", 10, 1000, 100)?)
                    .with_initial(reader.label("initial_solution", INITIAL, InitialSolution::Neh)?);
                checked(config.validate(), AlgorithmConfig::LocalSearch(config))?
            }
            Algorithm::IteratedLocalSearch => {
                let config = IlsConfig::default()
                    .with_perturbation(reader.label(
                        "perturbation",
                        PERTURBATION,
                        Perturbation::Low,
                    )?)
                    .with_max_iterations(reader.integer("max_iterations", 10, 1000, 100)?)
                    .with_acceptance(reader.label(
                        "acceptance_criterion",
                        ACCEPTANCE,
                        Acceptance::Better,
                    )?)
                    .with_neighborhood(reader.label(
                        "neighborhood_type",
                        DESCENT_MOVES,
                        Neighborhood::Insert,
                    )?)
                    .with_local_search_iterations(reader.integer(
                        "local_search_iterations",
                        10,
                        1000,
                        100,
                    )?)
                    .with_temperature_factor(reader.number("temperature_factor", 0.01, 5.0, 0.4)?)
                    .with_initial(reader.label("initial_solution", INITIAL, InitialSolution::Neh)?);
                checked(config.validate(), AlgorithmConfig::Ils(config))?
            }
            Algorithm::SimulatedAnnealing => {
                let config = SaConfig::default()
                    .with_initial_temperature(reader.number("initial_temp", 100.0, 1000.0, 500.0)?)
                    .with_cooling_rate(reader.number("cooling_rate", 0.7, 0.99, 0.95)?)
                    .with_max_iterations(reader.integer("max_iterations", 100, 5000, 1000)?)
                    .with_neighborhood(reader.label("neighborhood", SA_MOVES, SaMove::Swap)?)
                    .with_initial(reader.label("initial_solution", INITIAL, InitialSolution::Neh)?);
                checked(config.validate(), AlgorithmConfig::Sa(config))?
            }
            Algorithm::GeneticAlgorithm => {
                let method = reader.label("selection_method", SELECTION, Selection::Tournament(3))?;
                let tournament_size = reader.integer("tournament_size", 2, 10, 3)?;
                let selection = match method {
                    Selection::Tournament(_) => Selection::Tournament(tournament_size),
                    other => other,
                };
                let config = GaConfig::default()
                    .with_population_size(reader.integer("population_size", 10, 200, 50)?)
                    .with_crossover_rate(reader.number("crossover_rate", 0.5, 1.0, 0.8)?)
                    .with_mutation_rate(reader.number("mutation_rate", 0.01, 0.5, 0.2)?)
                    .with_generations(reader.integer("generations", 10, 500, 100)?)
                    .with_selection(selection)
                    .with_parallel(reader.flag("parallel", true)?);
                checked(config.validate(), AlgorithmConfig::Ga(config))?
            }
            Algorithm::TabuSearch => {
                let config = TabuConfig::default()
                    .with_tabu_size(reader.integer("tabu_size", 5, 50, 20)?)
                    .with_max_iterations(reader.integer("max_iterations", 50, 1000, 200)?)
                    .with_neighborhood(reader.label(
                        "neighborhood",
                        TABU_MOVES,
                        Neighborhood::Swap,
                    )?)
                    .with_aspiration(reader.flag("aspiration", true)?)
                    .with_initial(reader.label("initial_solution", INITIAL, InitialSolution::Neh)?);
                checked(config.validate(), AlgorithmConfig::Tabu(config))?
            }
            Algorithm::AntColony => {
                let config = AcoConfig::default()
                    .with_population(reader.integer("population", 10, 100, 30)?)
                    .with_iterations(reader.integer("iterations", 10, 500, 100)?)
                    .with_pheromone_weight(reader.number("pheromone_weight", 0.5, 3.0, 1.0)?)
                    .with_evaporation_rate(reader.number("evaporation_rate", 0.1, 0.9, 0.5)?);
                checked(config.validate(), AlgorithmConfig::Aco(config))?
            }
            Algorithm::ParticleSwarm => {
                let config = PsoConfig::default()
                    .with_population(reader.integer("population", 10, 100, 30)?)
                    .with_iterations(reader.integer("iterations", 10, 500, 100)?)
                    .with_inertia(reader.number("inertia", 0.1, 1.0, 0.7)?)
                    .with_cognitive(reader.number("cognitive", 0.5, 2.5, 1.5)?)
                    .with_social(reader.number("social", 0.5, 2.5, 1.5)?);
                checked(config.validate(), AlgorithmConfig::Pso(config))?
            }
        };

        Ok((config, reader.finish(algorithm)))
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmConfig::Neh(_) => Algorithm::Neh,
            AlgorithmConfig::LocalSearch(_) => Algorithm::LocalSearch,
            AlgorithmConfig::Ils(_) => Algorithm::IteratedLocalSearch,
            AlgorithmConfig::Sa(_) => Algorithm::SimulatedAnnealing,
            AlgorithmConfig::Ga(_) => Algorithm::GeneticAlgorithm,
            AlgorithmConfig::Tabu(_) => Algorithm::TabuSearch,
            AlgorithmConfig::Aco(_) => Algorithm::AntColony,
            AlgorithmConfig::Pso(_) => Algorithm::ParticleSwarm,
        }
    }

    /// Runs the configured driver.
    pub fn run<R: Rng>(
        &self,
        instance: &Instance,
        rng: &mut R,
        control: &RunControl,
    ) -> Result<Outcome> {
        match self {
            AlgorithmConfig::Neh(c) => execute(c, instance, rng, control),
            AlgorithmConfig::LocalSearch(c) => execute(c, instance, rng, control),
            AlgorithmConfig::Ils(c) => execute(c, instance, rng, control),
            AlgorithmConfig::Sa(c) => execute(c, instance, rng, control),
            AlgorithmConfig::Ga(c) => execute(c, instance, rng, control),
            AlgorithmConfig::Tabu(c) => execute(c, instance, rng, control),
            AlgorithmConfig::Aco(c) => execute(c, instance, rng, control),
            AlgorithmConfig::Pso(c) => execute(c, instance, rng, control),
        }
    }
}

fn unexpected(key: &str, expected: &str, value: &Value) -> FlowshopError {
    FlowshopError::invalid_parameter(key, format!("expected {expected}, got {value}"))
}

fn checked(
    validation: std::result::Result<(), String>,
    config: AlgorithmConfig,
) -> Result<AlgorithmConfig> {
    validation
        .map(|()| config)
        .map_err(|reason| FlowshopError::invalid_parameter("parameters", reason))
}

// ============================================================================
// Label tables
// ============================================================================

const INITIAL: &[(&str, InitialSolution)] = &[
    ("NEH", InitialSolution::Neh),
    ("Random", InitialSolution::Random),
];

const DESCENT_MOVES: &[(&str, Neighborhood)] = &[
    ("Swap", Neighborhood::Swap),
    ("Insert", Neighborhood::Insert),
    ("2-opt", Neighborhood::TwoOpt),
];

const TABU_MOVES: &[(&str, Neighborhood)] = &[
    ("Swap", Neighborhood::Swap),
    ("Insert", Neighborhood::Insert),
    ("Hybrid", Neighborhood::Hybrid),
];

const SA_MOVES: &[(&str, SaMove)] = &[
    ("Swap", SaMove::Swap),
    ("Insert", SaMove::Insert),
    ("Scramble", SaMove::Scramble),
];

const PERTURBATION: &[(&str, Perturbation)] = &[
    ("Low", Perturbation::Low),
    ("Medium", Perturbation::Medium),
    ("High", Perturbation::High),
];

const ACCEPTANCE: &[(&str, Acceptance)] = &[
    ("Better", Acceptance::Better),
    ("Always", Acceptance::Always),
    ("Temperature Based", Acceptance::TemperatureBased),
];

const SELECTION: &[(&str, Selection)] = &[
    ("Tournament", Selection::Tournament(3)),
    ("Roulette Wheel", Selection::Roulette),
    ("Rank Based", Selection::Rank),
];

/// Lower-cases and drops spaces, dashes and underscores, so that
/// `"Temperature Based"`, `"temperature_based"` and `"TemperatureBased"`
/// all name the same label.
fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Reader
// ============================================================================

struct Reader<'p> {
    params: &'p Parameters,
    seen: BTreeSet<&'static str>,
    adjustments: Vec<ParameterAdjustment>,
}

impl<'p> Reader<'p> {
    fn new(params: &'p Parameters) -> Self {
        Self {
            params,
            seen: BTreeSet::new(),
            adjustments: Vec::new(),
        }
    }

    fn get(&mut self, key: &'static str) -> Option<&'p Value> {
        self.seen.insert(key);
        self.params.get(key).filter(|v| !v.is_null())
    }

    fn adjust(&mut self, key: &str, requested: &Value, applied: Value) {
        log::warn!("parameter `{key}` adjusted from {requested} to {applied}");
        self.adjustments.push(ParameterAdjustment {
            key: key.to_string(),
            requested: requested.clone(),
            applied,
        });
    }

    fn integer(
        &mut self,
        key: &'static str,
        min: usize,
        max: usize,
        default: usize,
    ) -> Result<usize> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };

        let (applied, exact) = if let Some(u) = value.as_u64() {
            (usize::try_from(u).unwrap_or(usize::MAX).clamp(min, max), true)
        } else if value.as_i64().is_some() {
            // Negative integers
            (min, true)
        } else if let Some(f) = value.as_f64() {
            if !f.is_finite() {
                return Err(unexpected(key, "a finite number", value));
            }
            let rounded = f.round().clamp(min as f64, max as f64) as usize;
            (rounded, f.fract() == 0.0)
        } else {
            return Err(unexpected(key, "an integer", value));
        };

        let requested_matches = exact && value.as_f64() == Some(applied as f64);
        if !requested_matches {
            self.adjust(key, value, Value::from(applied));
        }
        Ok(applied)
    }

    fn number(&mut self, key: &'static str, min: f64, max: f64, default: f64) -> Result<f64> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };
        let Some(requested) = value.as_f64() else {
            return Err(unexpected(key, "a number", value));
        };
        if !requested.is_finite() {
            return Err(unexpected(key, "a finite number", value));
        }

        let applied = requested.clamp(min, max);
        if applied != requested {
            self.adjust(key, value, Value::from(applied));
        }
        Ok(applied)
    }

    fn flag(&mut self, key: &'static str, default: bool) -> Result<bool> {
        match self.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(unexpected(key, "a boolean", other)),
        }
    }

    fn label<T: Copy>(
        &mut self,
        key: &'static str,
        choices: &[(&str, T)],
        default: T,
    ) -> Result<T> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };
        let Some(text) = value.as_str() else {
            return Err(unexpected(key, "a string", value));
        };

        let wanted = normalize_label(text);
        choices
            .iter()
            .find(|(name, _)| normalize_label(name) == wanted)
            .map(|&(_, choice)| choice)
            .ok_or_else(|| {
                let names: Vec<&str> = choices.iter().map(|(name, _)| *name).collect();
                FlowshopError::invalid_parameter(
                    key,
                    format!("unknown value {text:?}, expected one of {}", names.join(", ")),
                )
            })
    }

    /// Logs the keys that were not read and returns the adjustments.
    fn finish(self, algorithm: Algorithm) -> Vec<ParameterAdjustment> {
        for key in self.params.keys() {
            if !self.seen.contains(key.as_str()) {
                log::debug!("ignoring parameter `{key}` not used by {algorithm}");
            }
        }
        self.adjustments
    }
}
