//! The contract between the evolution engine and a scoring function.

use crate::cards::Card;

/// Scores the expressed cards of a hand.
///
/// This is the only thing the engine knows about the card game being
/// played. Swapping in another implementation (poker, cribbage, ...) leaves
/// the genotype and the engine untouched.
///
/// # Implementing
///
/// ```
/// use card_evolution::cards::{Card, Suit};
/// use card_evolution::fitness::HandFitness;
///
/// /// One point per spade.
/// struct SpadeCount;
///
/// impl HandFitness for SpadeCount {
///     fn evaluate(&self, expressed: &[Card]) -> f64 {
///         expressed.iter().filter(|c| c.suit() == Suit::Spades).count() as f64
///     }
///
///     fn max_score(&self) -> f64 {
///         13.0
///     }
/// }
/// ```
pub trait HandFitness: Send + Sync {
    /// Scores 13 distinct expressed cards. Higher is fitter.
    ///
    /// Must return a finite value.
    fn evaluate(&self, expressed: &[Card]) -> f64;

    /// The highest score [`evaluate`](HandFitness::evaluate) can return.
    ///
    /// Used as the default fitness goal of a run.
    fn max_score(&self) -> f64;
}

impl<F: HandFitness + ?Sized> HandFitness for &F {
    fn evaluate(&self, expressed: &[Card]) -> f64 {
        (**self).evaluate(expressed)
    }

    fn max_score(&self) -> f64 {
        (**self).max_score()
    }
}
