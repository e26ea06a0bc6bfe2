//! Evolution engine.
//!
//! Evolves a population of [`Hand`](crate::genotype::Hand)s toward a fitness
//! goal. Each generation:
//!
//! 1. **Reproduction**: every parent produces a brood sized by how its score
//!    compares to the population mean, by budding or by crossover with a
//!    random mate. Passes repeat until there are at least
//!    `population_size` children.
//! 2. **Selection**: a share of the surplus, set by the selection pressure,
//!    is removed by fitness rank.
//! 3. **Bottleneck**: any remaining surplus is removed at random.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: population size, mutation rate, pressures, goal
//! - [`Evolution`]: owns the population and runs the loop
//! - [`GenerationReport`]: per-generation figures for progress printers
//! - [`EvolutionResult`]: configuration with initial and latest statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
pub mod selection;
mod types;

pub use config::{
    EvolutionConfig, MAX_CHILDREN_BASELINE, MAX_CHILDREN_PER_GENERATION, MAX_REPRODUCTION_PRESSURE,
};
pub use runner::{Evolution, BEST_HANDS_REPORTED};
pub use types::{EvolutionResult, GenerationReport, ReproductionEntry, RunOutcome};
