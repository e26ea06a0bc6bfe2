//! Mutation and crossover operators on 52-card chromosomes.
//!
//! A chromosome is a permutation of the deck. The first [`HAND_SIZE`] cards
//! are expressed (the hand in play); the rest is a reserve that only feeds
//! mutation and recombination. Both operators keep the permutation intact.
//!
//! # Mutation
//!
//! - [`mutate`]: per expressed position, with probability `rate`, trade the
//!   card for a random one from the reserve.
//!
//! # Crossover
//!
//! - [`crossover`]: interleave shuffled expressed cards of two parents until
//!   13 distinct cards are collected.

use super::counters::DealCounters;
use crate::cards::{Card, DECK_SIZE, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// A full deck ordering: expressed cards first, reserve after.
pub type Chromosome = [Card; DECK_SIZE];

// ============================================================================
// Mutation
// ============================================================================

/// Mutates the expressed region of `cards` in place.
///
/// Each of the 13 expressed positions is visited in order and mutates
/// independently with probability `rate`. A mutation reshuffles the reserve,
/// then moves the expressed card to the very end of the chromosome. Every
/// card behind it shifts left by one, so the last reserve card slides up
/// into the expressed region and the displaced card becomes the new last
/// reserve card.
///
/// Returns the number of mutations applied. A `rate` of zero draws no
/// random numbers at all.
///
/// # Complexity
/// O(13 · 52) worst case
pub fn mutate<R: Rng + ?Sized>(
    cards: &mut Chromosome,
    rate: f64,
    rng: &mut R,
    counters: &mut DealCounters,
) -> usize {
    if rate <= 0.0 {
        return 0;
    }

    let mut mutations = 0;
    for i in 0..HAND_SIZE {
        if rng.random_range(0.0..1.0) < rate {
            cards[HAND_SIZE..].shuffle(rng);
            counters.record_shuffle();
            cards[i..].rotate_left(1);
            mutations += 1;
        }
    }
    mutations
}

// ============================================================================
// Crossover
// ============================================================================

/// Recombines the expressed cards of two parents into a new chromosome.
///
/// # Algorithm
///
/// 1. Shuffle each parent's 13 expressed cards independently
/// 2. Alternate: take the next mom card, then (while still short) the next
///    dad card, keeping only cards not already collected
/// 3. Stop at 13 distinct cards; they become the expressed region in
///    ascending order
/// 4. The 39 cards left over form the reserve, also ascending
///
/// Step 2 always finishes within 13 rounds: by then every mom card has been
/// collected.
pub fn crossover<R: Rng + ?Sized>(mom: &Chromosome, dad: &Chromosome, rng: &mut R) -> Chromosome {
    let mut mom_list = mom[..HAND_SIZE].to_vec();
    mom_list.shuffle(rng);
    let mut dad_list = dad[..HAND_SIZE].to_vec();
    dad_list.shuffle(rng);

    let mut upcards = BTreeSet::new();
    for (&m, &d) in mom_list.iter().zip(dad_list.iter()) {
        upcards.insert(m);
        if upcards.len() < HAND_SIZE {
            upcards.insert(d);
        }
        if upcards.len() >= HAND_SIZE {
            break;
        }
    }

    let reserve = Card::deck().into_iter().filter(|c| !upcards.contains(c));

    let mut child = Card::deck();
    for (slot, card) in child.iter_mut().zip(upcards.iter().copied().chain(reserve)) {
        *slot = card;
    }
    child
}

// ============================================================================
// Helpers
// ============================================================================

/// Whether `cards` holds every card of the deck exactly once.
pub fn is_permutation(cards: &[Card]) -> bool {
    if cards.len() != DECK_SIZE {
        return false;
    }
    let mut seen = [false; DECK_SIZE];
    for card in cards {
        if std::mem::replace(&mut seen[card.index()], true) {
            return false;
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn shuffled_deck(seed: u64) -> Chromosome {
        let mut deck = Card::deck();
        deck.shuffle(&mut create_rng(seed));
        deck
    }

    fn has_distinct_expressed(cards: &Chromosome) -> bool {
        let set: BTreeSet<Card> = cards[..HAND_SIZE].iter().copied().collect();
        set.len() == HAND_SIZE
    }

    // ---- Mutation ----

    #[test]
    fn test_zero_rate_is_identity() {
        let mut rng = create_rng(42);
        let mut counters = DealCounters::new();
        let original = shuffled_deck(1);
        let mut cards = original;

        assert_eq!(mutate(&mut cards, 0.0, &mut rng, &mut counters), 0);
        assert_eq!(cards, original);
        assert_eq!(counters.shuffles, 0);
    }

    #[test]
    fn test_full_rate_mutates_every_position() {
        let mut rng = create_rng(42);
        let mut counters = DealCounters::new();
        let mut cards = shuffled_deck(2);

        assert_eq!(mutate(&mut cards, 1.0, &mut rng, &mut counters), HAND_SIZE);
        assert_eq!(counters.shuffles, HAND_SIZE as u64);
        assert_eq!(counters.draws, HAND_SIZE as u64);
        assert!(is_permutation(&cards));
    }

    #[test]
    fn test_mutation_moves_card_to_end() {
        // A one-position mutation with rate 1.0 can be replayed by hand:
        // reshuffle the reserve with the same stream, then rotate.
        let original = shuffled_deck(3);
        let mut cards = original;
        let mut counters = DealCounters::new();
        let mut rng = create_rng(9);
        mutate(&mut cards, 1.0, &mut rng, &mut counters);

        let mut expected = original;
        let mut replay = create_rng(9);
        for i in 0..HAND_SIZE {
            let _: f64 = replay.random_range(0.0..1.0);
            expected[HAND_SIZE..].shuffle(&mut replay);
            expected[i..].rotate_left(1);
        }
        assert_eq!(cards, expected);
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_draws_only_parent_cards() {
        let mom = shuffled_deck(10);
        let dad = shuffled_deck(11);
        let child = crossover(&mom, &dad, &mut create_rng(5));

        let parents: BTreeSet<Card> = mom[..HAND_SIZE]
            .iter()
            .chain(dad[..HAND_SIZE].iter())
            .copied()
            .collect();
        for card in &child[..HAND_SIZE] {
            assert!(parents.contains(card), "{card} came from neither parent");
        }
        assert!(is_permutation(&child));
    }

    #[test]
    fn test_crossover_sorted_regions() {
        let child = crossover(&shuffled_deck(20), &shuffled_deck(21), &mut create_rng(6));
        assert!(child[..HAND_SIZE].windows(2).all(|w| w[0] < w[1]));
        assert!(child[HAND_SIZE..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_crossover_identical_parents() {
        let parent = shuffled_deck(30);
        let child = crossover(&parent, &parent, &mut create_rng(7));
        let expected: BTreeSet<Card> = parent[..HAND_SIZE].iter().copied().collect();
        let got: BTreeSet<Card> = child[..HAND_SIZE].iter().copied().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_is_permutation_rejects_duplicates() {
        let mut cards = Card::deck();
        assert!(is_permutation(&cards));
        cards[5] = cards[6];
        assert!(!is_permutation(&cards));
        assert!(!is_permutation(&cards[..51]));
    }

    proptest! {
        #[test]
        fn prop_mutation_preserves_permutation(
            seed in any::<u64>(),
            deck_seed in any::<u64>(),
            rate in 0.0f64..=1.0,
        ) {
            let mut cards = shuffled_deck(deck_seed);
            let mut counters = DealCounters::new();
            let applied = mutate(&mut cards, rate, &mut create_rng(seed), &mut counters);
            prop_assert!(is_permutation(&cards));
            prop_assert!(has_distinct_expressed(&cards));
            prop_assert_eq!(counters.shuffles, applied as u64);
        }

        #[test]
        fn prop_crossover_is_permutation(
            seed in any::<u64>(),
            mom_seed in any::<u64>(),
            dad_seed in any::<u64>(),
        ) {
            let child = crossover(
                &shuffled_deck(mom_seed),
                &shuffled_deck(dad_seed),
                &mut create_rng(seed),
            );
            prop_assert!(is_permutation(&child));
            prop_assert!(has_distinct_expressed(&child));
        }
    }
}
