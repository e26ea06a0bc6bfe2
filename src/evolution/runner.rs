//! The generation loop.
//!
//! [`Evolution`] owns the population and advances it one generation at a
//! time: reproduction → fitness selection → random bottleneck → statistics.

use super::config::{EvolutionConfig, MAX_CHILDREN_PER_GENERATION};
use super::selection::{bottleneck, child_count, pick_mate, select_fittest, sort_by_score_desc};
use super::types::{EvolutionResult, GenerationReport, ReproductionEntry, RunOutcome};
use crate::error::{EvolutionError, Result};
use crate::fitness::{BridgeFitness, HandFitness};
use crate::genotype::{DealCounters, Hand};
use crate::random::rng_from_seed;
use crate::stats::{self, GenerationStats, ScoreHistogram};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeMap;

/// Number of hands returned by an unsuccessful [`Evolution::run`].
pub const BEST_HANDS_REPORTED: usize = 3;

/// Evolves a population of hands toward a fitness goal.
///
/// # Usage
///
/// ```
/// use card_evolution::evolution::{Evolution, EvolutionConfig};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_fitness_goal(15.0)
///     .with_seed(42);
/// let mut evolution = Evolution::new(config).unwrap();
/// let outcome = evolution.run(200, None).unwrap();
/// assert!(outcome.generations <= 200);
/// ```
#[derive(Debug)]
pub struct Evolution<F: HandFitness = BridgeFitness, R: Rng = StdRng> {
    config: EvolutionConfig,
    fitness: F,
    rng: R,
    counters: DealCounters,
    hands: Vec<Hand>,
    generation: Option<usize>,
    initial_stats: Option<GenerationStats>,
    latest_stats: Option<GenerationStats>,
    history: Vec<GenerationStats>,
    last_report: Option<GenerationReport>,
}

impl Evolution<BridgeFitness, StdRng> {
    /// Creates a bridge-hand evolution seeded from `config.seed`.
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        Self::with_fitness(BridgeFitness, config)
    }
}

impl<F: HandFitness> Evolution<F, StdRng> {
    /// Creates an evolution with a custom fitness, seeded from
    /// `config.seed`.
    pub fn with_fitness(fitness: F, config: EvolutionConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(fitness, config, rng)
    }
}

impl<F: HandFitness, R: Rng> Evolution<F, R> {
    /// Creates an evolution drawing from an injected random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(fitness: F, config: EvolutionConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fitness,
            rng,
            counters: DealCounters::new(),
            hands: Vec::new(),
            generation: None,
            initial_stats: None,
            latest_stats: None,
            history: Vec::new(),
            last_report: None,
        })
    }

    /// Produces generation 0.
    ///
    /// Without `seed` the population is `population_size` random deals,
    /// best first. With `seed`, up to `population_size` of the supplied
    /// hands are adopted as they are. Restarting discards the previous
    /// population and history but keeps the deal counters.
    ///
    /// # Errors
    /// [`EvolutionError::InsufficientData`] if fewer than two hands are
    /// available for statistics.
    pub fn start(&mut self, seed: Option<Vec<Hand>>) -> Result<()> {
        let n = self.config.population_size;
        let hands = match seed {
            Some(mut hands) => {
                hands.truncate(n);
                hands
            }
            None => {
                let mut hands = Vec::with_capacity(n);
                for _ in 0..n {
                    hands.push(Hand::genesis(&self.fitness, &mut self.rng, &mut self.counters));
                }
                sort_by_score_desc(&mut hands);
                hands
            }
        };

        let stats = GenerationStats::from_hands(&hands)?;
        self.counters.record_hands(hands.len());

        info!(
            "generation 0: {} hands, max {}, mean {:.3}, sd {:.3}",
            hands.len(),
            stats.max,
            stats.mean,
            stats.std_dev
        );

        self.hands = hands;
        self.generation = Some(0);
        self.initial_stats = Some(stats);
        self.latest_stats = Some(stats);
        self.history = vec![stats];
        self.last_report = None;
        Ok(())
    }

    /// Advances one generation, starting the run first if needed.
    ///
    /// Returns whether any hand of the new population meets the fitness
    /// goal.
    pub fn nextgen(&mut self) -> Result<bool> {
        if self.generation.is_none() {
            self.start(None)?;
        }
        let generation = self.generation.map_or(1, |g| g + 1);
        let n = self.config.population_size;

        // 1. Reproduction
        let scores: Vec<f64> = self.hands.iter().map(Hand::score).collect();
        let parent_mean = stats::mean(&scores)?;
        let degenerate_mean = parent_mean <= 0.0;
        if degenerate_mean {
            warn!(
                "generation {generation}: mean score {parent_mean} is not positive, \
                 every parent gets the baseline of {} children",
                self.config.children_baseline
            );
        }
        let (mut children, reproduction) = self.reproduce(parent_mean)?;
        let child_total = children.len();
        self.counters.record_hands(child_total);
        let children_stats = GenerationStats::from_hands(&children)?;

        // 2. Fitness selection
        let selection_stats =
            if select_fittest(&mut children, n, self.config.selection_pressure) {
                Some(GenerationStats::from_hands(&children)?)
            } else {
                None
            };
        let survivors = children.len();

        // 3. Random bottleneck
        let bottlenecked = bottleneck(&mut children, n, &mut self.rng);

        // 4. Statistics
        let stats = GenerationStats::from_hands(&children)?;
        debug!(
            "generation {generation}: {child_total} children, {survivors} after selection, \
             bottleneck {bottlenecked}, max {}, mean {:.3}, sd {:.3}",
            stats.max, stats.mean, stats.std_dev
        );

        self.last_report = Some(GenerationReport {
            generation,
            reproduction,
            degenerate_mean,
            children: child_total,
            children_stats,
            selection_stats,
            survivors,
            bottlenecked,
            stats,
            histogram: ScoreHistogram::from_hands(&children),
        });
        self.hands = children;
        self.generation = Some(generation);
        self.latest_stats = Some(stats);
        self.history.push(stats);

        // 5. Goal check
        Ok(self.goal_reached())
    }

    /// Runs generations until the goal is met or `max_generations` is
    /// reached.
    ///
    /// Always restarts from generation 0 (from `seed` if given). With
    /// `max_generations == 0` only the starting population is checked.
    pub fn run(&mut self, max_generations: usize, seed: Option<Vec<Hand>>) -> Result<RunOutcome> {
        self.run_with_callback(max_generations, seed, |_, _| {})
    }

    /// Runs like [`run`](Self::run), calling `on_generation` with the report
    /// and the cumulative deal counters after every completed generation.
    ///
    /// Generation 0 produces no report; read it from
    /// [`initial_stats`](Self::initial_stats).
    pub fn run_with_callback<C>(
        &mut self,
        max_generations: usize,
        seed: Option<Vec<Hand>>,
        mut on_generation: C,
    ) -> Result<RunOutcome>
    where
        C: FnMut(&GenerationReport, &DealCounters),
    {
        self.start(seed)?;

        let mut success = self.goal_reached();
        let mut generation = 0;
        while !success && generation < max_generations {
            success = self.nextgen()?;
            generation = self.generation.unwrap_or(generation + 1);
            if let Some(report) = &self.last_report {
                on_generation(report, &self.counters);
            }
        }

        info!(
            "run complete after {generation} generations: success = {success}, {} hands dealt",
            self.counters.hands_created
        );

        Ok(RunOutcome {
            success,
            generations: generation,
            best: if success {
                self.goal_hands()
            } else {
                self.best_hands(BEST_HANDS_REPORTED)
            },
        })
    }

    /// Produces the children of the current population.
    ///
    /// Full passes over the parents repeat until at least
    /// `population_size` children exist.
    fn reproduce(&mut self, parent_mean: f64) -> Result<(Vec<Hand>, Vec<ReproductionEntry>)> {
        let n = self.config.population_size;
        let counts = self
            .hands
            .iter()
            .map(|p| {
                child_count(
                    p.score(),
                    parent_mean,
                    self.config.children_baseline,
                    self.config.reproduction_pressure,
                )
            })
            .collect::<Result<Vec<usize>>>()?;

        let per_pass = counts
            .iter()
            .try_fold(0usize, |acc, &c| acc.checked_add(c))
            .filter(|&total| total <= MAX_CHILDREN_PER_GENERATION)
            .ok_or_else(|| {
                EvolutionError::InvalidConfiguration(format!(
                    "a reproduction pass would exceed {MAX_CHILDREN_PER_GENERATION} children \
                     (mean score {parent_mean}); lower reproduction_pressure"
                ))
            })?;
        if per_pass == 0 {
            return Err(EvolutionError::DegenerateMeanScore(parent_mean));
        }

        let rate = self.config.mutation_rate;
        let sexual = self.config.sexual && self.hands.len() > 1;
        let mut children = Vec::with_capacity(per_pass.max(n));

        while children.len() < n {
            for (i, (parent, &count)) in self.hands.iter().zip(&counts).enumerate() {
                for _ in 0..count {
                    let child = if sexual {
                        let dad = &self.hands[pick_mate(i, self.hands.len(), &mut self.rng)];
                        Hand::mate(
                            parent,
                            dad,
                            rate,
                            &self.fitness,
                            &mut self.rng,
                            &mut self.counters,
                        )?
                    } else {
                        Hand::bud(parent, rate, &self.fitness, &mut self.rng, &mut self.counters)?
                    };
                    children.push(child);
                }
            }
        }

        let mut grouped: BTreeMap<i64, ReproductionEntry> = BTreeMap::new();
        for (parent, &count) in self.hands.iter().zip(&counts) {
            let score = parent.score().round() as i64;
            grouped
                .entry(score)
                .or_insert(ReproductionEntry {
                    score,
                    parents: 0,
                    children_each: count,
                })
                .parents += 1;
        }

        Ok((children, grouped.into_values().collect()))
    }

    /// Whether any current hand meets the fitness goal.
    pub fn goal_reached(&self) -> bool {
        let goal = self.fitness_goal();
        self.hands.iter().any(|h| h.score() >= goal)
    }

    /// The effective fitness goal: the configured one, or the fitness
    /// module's maximum score.
    pub fn fitness_goal(&self) -> f64 {
        self.config
            .fitness_goal
            .unwrap_or_else(|| self.fitness.max_score())
    }

    /// Hands meeting the goal, best first.
    pub fn goal_hands(&self) -> Vec<Hand> {
        let goal = self.fitness_goal();
        let mut hands: Vec<Hand> = self
            .hands
            .iter()
            .filter(|h| h.score() >= goal)
            .cloned()
            .collect();
        sort_by_score_desc(&mut hands);
        hands
    }

    /// The `k` highest scoring hands, best first.
    pub fn best_hands(&self, k: usize) -> Vec<Hand> {
        let mut hands = self.hands.clone();
        sort_by_score_desc(&mut hands);
        hands.truncate(k);
        hands
    }

    /// Configuration plus initial and latest statistics.
    ///
    /// `None` before [`start`](Self::start).
    pub fn result(&self) -> Option<EvolutionResult> {
        Some(EvolutionResult {
            population_size: self.config.population_size,
            mutation_rate: self.config.mutation_rate,
            sexual: self.config.sexual,
            children_baseline: self.config.children_baseline,
            reproduction_pressure: self.config.reproduction_pressure,
            selection_pressure: self.config.selection_pressure,
            fitness_goal: self.fitness_goal(),
            generation: self.generation?,
            initial: self.initial_stats?,
            latest: self.latest_stats?,
            counters: self.counters,
        })
    }

    /// The current population.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Current generation, `None` before [`start`](Self::start).
    pub fn generation(&self) -> Option<usize> {
        self.generation
    }

    /// Statistics of generation 0.
    pub fn initial_stats(&self) -> Option<GenerationStats> {
        self.initial_stats
    }

    /// Statistics of the current generation.
    pub fn latest_stats(&self) -> Option<GenerationStats> {
        self.latest_stats
    }

    /// Statistics of every generation since the last start, generation 0
    /// first.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Report of the most recent [`nextgen`](Self::nextgen) step.
    pub fn last_report(&self) -> Option<&GenerationReport> {
        self.last_report.as_ref()
    }

    /// Deal counters accumulated by this engine.
    pub fn counters(&self) -> DealCounters {
        self.counters
    }

    /// The configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// The fitness module.
    pub fn fitness(&self) -> &F {
        &self.fitness
    }
}

// ============================================================================
// Tests
// ============================================================================
