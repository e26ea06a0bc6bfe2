//! The hand genotype.

use super::counters::DealCounters;
use super::operators::{self, Chromosome};
use crate::cards::{format_hand, Card, DECK_SIZE, HAND_SIZE};
use crate::error::{EvolutionError, Result};
use crate::fitness::HandFitness;
use rand::seq::SliceRandom;
use rand::Rng;

/// A candidate hand: a 52-card chromosome plus its fitness.
///
/// The first 13 cards are expressed and scored; the remaining 39 are an
/// unexpressed reserve. A hand is scored once, at construction, and never
/// changes afterwards: evolution supersedes it with children instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    cards: Chromosome,
    mutation_rate: f64,
    score: f64,
}

impl Hand {
    /// Deals a uniformly random hand. No mutation is applied.
    pub fn genesis<F, R>(fitness: &F, rng: &mut R, counters: &mut DealCounters) -> Hand
    where
        F: HandFitness + ?Sized,
        R: Rng + ?Sized,
    {
        let mut cards = Card::deck();
        cards.shuffle(rng);
        counters.record_deal(HAND_SIZE);
        Self::scored(cards, 0.0, fitness)
    }

    /// Asexual reproduction: copies `parent` and mutates the copy.
    pub fn bud<F, R>(
        parent: &Hand,
        mutation_rate: f64,
        fitness: &F,
        rng: &mut R,
        counters: &mut DealCounters,
    ) -> Result<Hand>
    where
        F: HandFitness + ?Sized,
        R: Rng + ?Sized,
    {
        check_mutation_rate(mutation_rate)?;
        let mut cards = parent.cards;
        operators::mutate(&mut cards, mutation_rate, rng, counters);
        Ok(Self::scored(cards, mutation_rate, fitness))
    }

    /// Sexual reproduction: recombines the expressed cards of `mom` and
    /// `dad`, then mutates the result.
    pub fn mate<F, R>(
        mom: &Hand,
        dad: &Hand,
        mutation_rate: f64,
        fitness: &F,
        rng: &mut R,
        counters: &mut DealCounters,
    ) -> Result<Hand>
    where
        F: HandFitness + ?Sized,
        R: Rng + ?Sized,
    {
        check_mutation_rate(mutation_rate)?;
        let mut cards = operators::crossover(&mom.cards, &dad.cards, rng);
        operators::mutate(&mut cards, mutation_rate, rng, counters);
        Ok(Self::scored(cards, mutation_rate, fitness))
    }

    /// Builds a hand from an explicit deck ordering.
    ///
    /// Fails unless `cards` is a permutation of the 52 cards.
    pub fn from_cards<F>(cards: &[Card], fitness: &F) -> Result<Hand>
    where
        F: HandFitness + ?Sized,
    {
        if !operators::is_permutation(cards) {
            return Err(EvolutionError::InvalidGenotype(format!(
                "expected a permutation of {DECK_SIZE} cards, got {} cards",
                cards.len()
            )));
        }
        let mut chromosome = Card::deck();
        chromosome.copy_from_slice(cards);
        Ok(Self::scored(chromosome, 0.0, fitness))
    }

    /// Builds a hand whose expressed region is exactly `expressed`.
    ///
    /// The reserve holds the remaining cards in ascending order.
    pub fn from_expressed<F>(expressed: &[Card], fitness: &F) -> Result<Hand>
    where
        F: HandFitness + ?Sized,
    {
        if expressed.len() != HAND_SIZE {
            return Err(EvolutionError::InvalidGenotype(format!(
                "expected {HAND_SIZE} expressed cards, got {}",
                expressed.len()
            )));
        }
        let reserve = Card::deck()
            .into_iter()
            .filter(|c| !expressed.contains(c));
        let cards: Vec<Card> = expressed.iter().copied().chain(reserve).collect();
        Self::from_cards(&cards, fitness)
    }

    fn scored<F>(cards: Chromosome, mutation_rate: f64, fitness: &F) -> Hand
    where
        F: HandFitness + ?Sized,
    {
        let score = fitness.evaluate(&cards[..HAND_SIZE]);
        Hand {
            cards,
            mutation_rate,
            score,
        }
    }

    /// The full 52-card chromosome.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The 13 expressed cards.
    pub fn expressed(&self) -> &[Card] {
        &self.cards[..HAND_SIZE]
    }

    /// The 39 unexpressed reserve cards.
    pub fn reserve(&self) -> &[Card] {
        &self.cards[HAND_SIZE..]
    }

    /// Mutation rate this hand was created with (zero for dealt hands).
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Fitness of the expressed cards.
    pub fn score(&self) -> f64 {
        self.score
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_hand(self.expressed(), Some(self.score)))
    }
}

/// Rejects mutation rates outside [0, 1].
fn check_mutation_rate(rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(EvolutionError::InvalidConfiguration(format!(
            "mutation rate must be within [0, 1], got {rate}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::fitness::{BridgeFitness, BRIDGE_MAX_SCORE};
    use crate::random::create_rng;
    use std::collections::BTreeSet;

    fn assert_valid(hand: &Hand) {
        assert!(operators::is_permutation(hand.cards()));
        let expressed: BTreeSet<Card> = hand.expressed().iter().copied().collect();
        assert_eq!(expressed.len(), HAND_SIZE);
        assert_eq!(hand.reserve().len(), DECK_SIZE - HAND_SIZE);
        assert!(hand.score() >= 0.0 && hand.score() <= f64::from(BRIDGE_MAX_SCORE));
        assert!(hand.score().fract().abs() < 1e-12);
    }

    #[test]
    fn test_genesis_is_valid_and_counted() {
        let mut rng = create_rng(42);
        let mut counters = DealCounters::new();
        for _ in 0..100 {
            let hand = Hand::genesis(&BridgeFitness, &mut rng, &mut counters);
            assert_valid(&hand);
            assert!(hand.mutation_rate().abs() < 1e-15);
        }
        assert_eq!(counters.draws, 100 * HAND_SIZE as u64);
        assert_eq!(counters.shuffles, 0);
    }

    #[test]
    fn test_bud_without_mutation_copies_parent() {
        let mut rng = create_rng(42);
        let mut counters = DealCounters::new();
        let parent = Hand::genesis(&BridgeFitness, &mut rng, &mut counters);
        let child = Hand::bud(&parent, 0.0, &BridgeFitness, &mut rng, &mut counters).unwrap();
        assert_eq!(child.cards(), parent.cards());
        assert!((child.score() - parent.score()).abs() < 1e-12);
    }

    #[test]
    fn test_bud_with_mutation_stays_valid() {
        let mut rng = create_rng(7);
        let mut counters = DealCounters::new();
        let mut hand = Hand::genesis(&BridgeFitness, &mut rng, &mut counters);
        for _ in 0..200 {
            hand = Hand::bud(&hand, 0.3, &BridgeFitness, &mut rng, &mut counters).unwrap();
            assert_valid(&hand);
        }
        assert!(counters.shuffles > 0);
    }

    #[test]
    fn test_mate_is_valid() {
        let mut rng = create_rng(11);
        let mut counters = DealCounters::new();
        for _ in 0..100 {
            let mom = Hand::genesis(&BridgeFitness, &mut rng, &mut counters);
            let dad = Hand::genesis(&BridgeFitness, &mut rng, &mut counters);
            let child =
                Hand::mate(&mom, &dad, 1.0 / 13.0, &BridgeFitness, &mut rng, &mut counters)
                    .unwrap();
            assert_valid(&child);
        }
    }

    #[test]
    fn test_invalid_mutation_rate_rejected() {
        let mut rng = create_rng(1);
        let mut counters = DealCounters::new();
        let parent = Hand::genesis(&BridgeFitness, &mut rng, &mut counters);
        for rate in [-0.1, 1.5, f64::NAN] {
            let err = Hand::bud(&parent, rate, &BridgeFitness, &mut rng, &mut counters);
            assert!(matches!(err, Err(EvolutionError::InvalidConfiguration(_))));
            let err = Hand::mate(&parent, &parent, rate, &BridgeFitness, &mut rng, &mut counters);
            assert!(matches!(err, Err(EvolutionError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn test_from_expressed_scores() {
        let expressed = parse_cards("AS KS QS JS AH KH QH AD KD QD AC KC QC").unwrap();
        let hand = Hand::from_expressed(&expressed, &BridgeFitness).unwrap();
        assert_valid(&hand);
        assert_eq!(hand.expressed(), expressed.as_slice());
        assert!((hand.score() - 37.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_cards_rejects_bad_chromosome() {
        let mut cards = Card::deck().to_vec();
        cards[0] = cards[1];
        assert!(matches!(
            Hand::from_cards(&cards, &BridgeFitness),
            Err(EvolutionError::InvalidGenotype(_))
        ));
        assert!(Hand::from_expressed(&cards[..5], &BridgeFitness).is_err());
    }

    #[test]
    fn test_display_lists_sorted_expressed_and_score() {
        let expressed = parse_cards("2S 3S 4S 5S 6S 7S 8S 9S 10S JS QS KS AS").unwrap();
        let hand = Hand::from_expressed(&expressed, &BridgeFitness).unwrap();
        assert_eq!(
            hand.to_string(),
            "2S, 3S, 4S, 5S, 6S, 7S, 8S, 9S, 10S, JS, QS, KS, AS, 19"
        );
    }
}
