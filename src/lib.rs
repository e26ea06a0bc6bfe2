//! Evolution of card hands with a genetic algorithm.
//!
//! A population of contract-bridge hands is scored, reproduces with
//! mutation (and optionally crossover), undergoes selection and a random
//! bottleneck, and repeats until a hand reaches the fitness goal or the
//! generation budget runs out.
//!
//! - **Cards** ([`cards`]): integer card identifiers, suits, ranks and
//!   hand rendering.
//! - **Fitness** ([`fitness`]): the pluggable [`HandFitness`] contract and
//!   the bridge point count that implements it.
//! - **Genotype** ([`genotype`]): 52-card chromosomes whose first 13 cards
//!   are the hand in play, with mutation and crossover operators.
//! - **Evolution** ([`evolution`]): the generation loop, reproduction and
//!   selection.
//! - **Statistics** ([`stats`]): min/max/mean/standard deviation and score
//!   histograms.
//!
//! # Example
//!
//! ```
//! use card_evolution::{Evolution, EvolutionConfig};
//!
//! let config = EvolutionConfig::default().with_seed(7).with_fitness_goal(18.0);
//! let mut evolution = Evolution::new(config).unwrap();
//! let outcome = evolution.run(100, None).unwrap();
//! for hand in &outcome.best {
//!     println!("{hand}");
//! }
//! ```
//!
//! Randomness is injected: seed the engine through
//! [`EvolutionConfig::seed`] or hand it any [`rand::Rng`] with
//! [`Evolution::with_rng`] for reproducible runs.

pub mod cards;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod genotype;
pub mod random;
pub mod stats;

pub use error::{EvolutionError, Result};
pub use evolution::{Evolution, EvolutionConfig};
pub use fitness::{BridgeFitness, HandFitness};
pub use genotype::Hand;
