//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds every parameter that controls reproduction,
//! selection and termination.

use crate::cards::HAND_SIZE;
use crate::error::{EvolutionError, Result};

/// Largest accepted [`EvolutionConfig::children_baseline`].
pub const MAX_CHILDREN_BASELINE: usize = 1_000;

/// Largest accepted [`EvolutionConfig::reproduction_pressure`].
pub const MAX_REPRODUCTION_PRESSURE: f64 = 100.0;

/// Most children a single reproduction pass may produce.
///
/// Bounds `population_size * children_baseline` at validation time and
/// the actual brood total of every generation.
pub const MAX_CHILDREN_PER_GENERATION: usize = 1_000_000;

/// Configuration for an evolution run.
///
/// # Defaults
///
/// ```
/// use card_evolution::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.children_baseline, 4);
/// assert!(!config.sexual);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use card_evolution::evolution::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.2)
///     .with_sexual(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given; out-of-range values are reported by
/// [`validate`](EvolutionConfig::validate) rather than clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of hands kept at the end of each generation.
    pub population_size: usize,

    /// Per-card probability of mutation when a child is created (0.0–1.0).
    ///
    /// The default, 1/13, averages one mutation per hand.
    pub mutation_rate: f64,

    /// Use crossover between two parents instead of budding.
    pub sexual: bool,

    /// Children produced by a hand scoring exactly the population mean.
    pub children_baseline: usize,

    /// Relative increase in children for each relative increase in score
    /// over the mean.
    ///
    /// `0.0` gives every hand the baseline regardless of score.
    pub reproduction_pressure: f64,

    /// Share of the surplus children removed by fitness rank (0.0–1.0).
    ///
    /// The rest of the surplus is removed by a random bottleneck, so
    /// `1.0` is pure truncation selection and `0.0` is pure drift.
    pub selection_pressure: f64,

    /// Score that ends a run successfully.
    ///
    /// `None` uses the fitness module's maximum score.
    pub fitness_goal: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 1.0 / HAND_SIZE as f64,
            sexual: false,
            children_baseline: 4,
            reproduction_pressure: 1.0,
            selection_pressure: 0.8,
            fitness_goal: None,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-card mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables sexual reproduction.
    pub fn with_sexual(mut self, sexual: bool) -> Self {
        self.sexual = sexual;
        self
    }

    /// Sets the baseline number of children.
    pub fn with_children_baseline(mut self, n: usize) -> Self {
        self.children_baseline = n;
        self
    }

    /// Sets the reproduction pressure.
    pub fn with_reproduction_pressure(mut self, pressure: f64) -> Self {
        self.reproduction_pressure = pressure;
        self
    }

    /// Sets the selection pressure.
    pub fn with_selection_pressure(mut self, pressure: f64) -> Self {
        self.selection_pressure = pressure;
        self
    }

    /// Sets the fitness goal.
    pub fn with_fitness_goal(mut self, goal: f64) -> Self {
        self.fitness_goal = Some(goal);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`EvolutionError::InvalidConfiguration`] describing the first
    /// parameter out of range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(1..=MAX_CHILDREN_BASELINE).contains(&self.children_baseline) {
            return Err(invalid(format!(
                "children_baseline must be within [1, {MAX_CHILDREN_BASELINE}], got {}",
                self.children_baseline
            )));
        }
        match self.population_size.checked_mul(self.children_baseline) {
            Some(total) if total <= MAX_CHILDREN_PER_GENERATION => {}
            _ => {
                return Err(invalid(format!(
                    "population_size * children_baseline must not exceed \
                     {MAX_CHILDREN_PER_GENERATION}, got {} * {}",
                    self.population_size, self.children_baseline
                )))
            }
        }
        if !(0.0..=MAX_REPRODUCTION_PRESSURE).contains(&self.reproduction_pressure) {
            return Err(invalid(format!(
                "reproduction_pressure must be within [0, {MAX_REPRODUCTION_PRESSURE}], got {}",
                self.reproduction_pressure
            )));
        }
        if !(0.0..=1.0).contains(&self.selection_pressure) {
            return Err(invalid(format!(
                "selection_pressure must be within [0, 1], got {}",
                self.selection_pressure
            )));
        }
        if let Some(goal) = self.fitness_goal {
            if !goal.is_finite() {
                return Err(invalid(format!("fitness_goal must be finite, got {goal}")));
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> EvolutionError {
    EvolutionError::InvalidConfiguration(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 50);
        assert!((config.mutation_rate - 1.0 / 13.0).abs() < 1e-12);
        assert!(!config.sexual);
        assert_eq!(config.children_baseline, 4);
        assert!((config.reproduction_pressure - 1.0).abs() < 1e-12);
        assert!((config.selection_pressure - 0.8).abs() < 1e-12);
        assert!(config.fitness_goal.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(120)
            .with_mutation_rate(0.2)
            .with_sexual(true)
            .with_children_baseline(6)
            .with_reproduction_pressure(2.0)
            .with_selection_pressure(0.5)
            .with_fitness_goal(30.0)
            .with_seed(42);

        assert_eq!(config.population_size, 120);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert!(config.sexual);
        assert_eq!(config.children_baseline, 6);
        assert!((config.reproduction_pressure - 2.0).abs() < 1e-12);
        assert!((config.selection_pressure - 0.5).abs() < 1e-12);
        assert_eq!(config.fitness_goal, Some(30.0));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builders_do_not_clamp() {
        let config = EvolutionConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.5).abs() < 1e-12);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let cases = [
            EvolutionConfig::default().with_population_size(0),
            EvolutionConfig::default().with_population_size(1),
            EvolutionConfig::default().with_mutation_rate(-0.01),
            EvolutionConfig::default().with_mutation_rate(f64::NAN),
            EvolutionConfig::default().with_children_baseline(0),
            EvolutionConfig::default().with_reproduction_pressure(-1.0),
            EvolutionConfig::default().with_reproduction_pressure(f64::INFINITY),
            EvolutionConfig::default().with_selection_pressure(1.01),
            EvolutionConfig::default().with_fitness_goal(f64::NAN),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(EvolutionError::InvalidConfiguration(_))),
                "expected rejection of {config:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_oversized_broods() {
        let cases = [
            EvolutionConfig::default()
                .with_population_size(2)
                .with_children_baseline(usize::MAX / 2),
            EvolutionConfig::default().with_children_baseline(MAX_CHILDREN_BASELINE + 1),
            // 50 * usize::MAX overflows
            EvolutionConfig::default().with_children_baseline(usize::MAX),
            // within the per-hand limit, over the per-generation limit
            EvolutionConfig::default()
                .with_population_size(MAX_CHILDREN_PER_GENERATION)
                .with_children_baseline(2),
            EvolutionConfig::default().with_reproduction_pressure(MAX_REPRODUCTION_PRESSURE * 2.0),
            EvolutionConfig::default().with_reproduction_pressure(f64::MAX),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(EvolutionError::InvalidConfiguration(_))),
                "expected rejection of {config:?}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_limits() {
        let config = EvolutionConfig::default()
            .with_population_size(MAX_CHILDREN_PER_GENERATION / MAX_CHILDREN_BASELINE)
            .with_children_baseline(MAX_CHILDREN_BASELINE)
            .with_reproduction_pressure(MAX_REPRODUCTION_PRESSURE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_boundaries() {
        let config = EvolutionConfig::default()
            .with_population_size(2)
            .with_mutation_rate(1.0)
            .with_selection_pressure(0.0)
            .with_reproduction_pressure(0.0);
        assert!(config.validate().is_ok());
    }
}
