//! Records produced by the evolution engine.

use crate::genotype::{DealCounters, Hand};
use crate::stats::{GenerationStats, ScoreHistogram};

/// Brood size of every parent sharing one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReproductionEntry {
    /// Parent score, rounded to an integer.
    pub score: i64,
    /// Parents with this score.
    pub parents: usize,
    /// Children produced by each of them per reproduction pass.
    pub children_each: usize,
}

/// What happened during one generation step.
///
/// Carries the figures a progress printer needs; the engine itself never
/// prints.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Generation number produced by this step (1 for the first step).
    pub generation: usize,
    /// Brood sizes grouped by parent score, ascending.
    pub reproduction: Vec<ReproductionEntry>,
    /// Whether the mean score was non-positive and every parent fell back
    /// to the baseline brood.
    pub degenerate_mean: bool,
    /// Children produced before selection.
    pub children: usize,
    /// Statistics over all children.
    pub children_stats: GenerationStats,
    /// Statistics after fitness selection, if it was applied.
    pub selection_stats: Option<GenerationStats>,
    /// Children left after fitness selection.
    pub survivors: usize,
    /// Whether the random bottleneck culled a surplus.
    pub bottlenecked: bool,
    /// Statistics over the new population.
    pub stats: GenerationStats,
    /// Score histogram of the new population.
    pub histogram: ScoreHistogram,
}

/// Outcome of [`Evolution::run`](super::Evolution::run).
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Whether a hand reached the fitness goal.
    pub success: bool,
    /// Generations executed.
    pub generations: usize,
    /// Every hand meeting the goal on success, otherwise the best few
    /// hands. Best first.
    pub best: Vec<Hand>,
}

/// Configuration and headline statistics of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// Population size.
    pub population_size: usize,
    /// Per-card mutation rate.
    pub mutation_rate: f64,
    /// Whether reproduction was sexual.
    pub sexual: bool,
    /// Baseline children per parent.
    pub children_baseline: usize,
    /// Reproduction pressure.
    pub reproduction_pressure: f64,
    /// Selection pressure.
    pub selection_pressure: f64,
    /// Effective fitness goal.
    pub fitness_goal: f64,
    /// Latest generation number.
    pub generation: usize,
    /// Statistics of generation 0.
    pub initial: GenerationStats,
    /// Statistics of the latest generation.
    pub latest: GenerationStats,
    /// Deal counters at the time of the call.
    pub counters: DealCounters,
}
