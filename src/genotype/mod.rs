//! Hand genotypes.
//!
//! A [`Hand`] is a permutation of the deck whose first 13 cards are the hand
//! in play. Hands come from three constructors:
//!
//! - [`Hand::genesis`]: a random deal
//! - [`Hand::bud`]: a mutated copy of one parent
//! - [`Hand::mate`]: a crossover of two parents, then mutation
//!
//! # Submodules
//!
//! - [`operators`]: the mutation and crossover operators themselves

mod counters;
mod hand;
pub mod operators;

pub use counters::DealCounters;
pub use hand::Hand;

