//! Contract-bridge hand evaluation.
//!
//! A hand is worth its high-card points (A=4, K=3, Q=2, J=1) plus
//! distribution points (void=3, singleton=2, doubleton=1). Short suits whose
//! honors cannot be protected are "broken" and give back the larger of the
//! two values they earned.

use super::types::HandFitness;
use crate::cards::{Card, Rank, Suit, HAND_SIZE, SUITS};

/// Best score a bridge hand can reach: AKQJ in one suit and AKQ in the
/// other three.
pub const BRIDGE_MAX_SCORE: i32 = 37;

/// Per-suit components of a bridge score.
///
/// Arrays are indexed by [`Suit::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeBreakdown {
    /// High-card points held in each suit.
    pub face_card_values: [i32; SUITS],
    /// Distribution points of each suit.
    pub distribution_values: [i32; SUITS],
    /// Broken-suit penalty of each suit (zero or negative).
    pub broken_suit_penalties: [i32; SUITS],
}

impl BridgeBreakdown {
    /// Sum of the three components over all suits.
    pub fn total(&self) -> i32 {
        self.face_card_values.iter().sum::<i32>()
            + self.distribution_values.iter().sum::<i32>()
            + self.broken_suit_penalties.iter().sum::<i32>()
    }
}

impl std::fmt::Display for BridgeBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "face card values = {:?} distribution values = {:?} broken suit penalties = {:?}",
            self.face_card_values, self.distribution_values, self.broken_suit_penalties
        )
    }
}

/// Bridge point-count fitness with broken-suit penalties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeFitness;

impl BridgeFitness {
    /// Creates the bridge scorer.
    pub fn new() -> Self {
        Self
    }

    /// Computes the per-suit breakdown of `expressed`.
    ///
    /// Only the first 13 cards are read, so a full chromosome can be passed.
    pub fn breakdown(&self, expressed: &[Card]) -> BridgeBreakdown {
        let upcards = &expressed[..expressed.len().min(HAND_SIZE)];
        let mut counts = [0usize; SUITS];
        let mut out = BridgeBreakdown::default();

        for card in upcards {
            let suit = card.suit().index();
            counts[suit] += 1;
            out.face_card_values[suit] += face_card_value(card.rank());
        }

        for suit in Suit::ALL {
            let i = suit.index();
            out.distribution_values[i] = (3 - counts[i] as i32).max(0);
            if is_broken(upcards, suit, counts[i]) {
                out.broken_suit_penalties[i] =
                    -out.face_card_values[i].max(out.distribution_values[i]);
            }
        }

        out
    }

    /// Total bridge score of `expressed`.
    pub fn score(&self, expressed: &[Card]) -> i32 {
        self.breakdown(expressed).total()
    }
}

impl HandFitness for BridgeFitness {
    fn evaluate(&self, expressed: &[Card]) -> f64 {
        f64::from(self.score(expressed))
    }

    fn max_score(&self) -> f64 {
        f64::from(BRIDGE_MAX_SCORE)
    }
}

/// High-card points: rank minus 8, floored at zero, so only J/Q/K/A count.
fn face_card_value(rank: Rank) -> i32 {
    (rank.index() as i32 - 8).max(0)
}

/// Whether `suit`, held `count` times in `expressed`, is broken.
///
/// Only singletons and doubletons can be broken. Holding the ace, or no
/// honor at all, keeps the suit whole; among the rest only the guarded king
/// (K plus a spot card) survives. So K, Q, J, KQ, KJ, QJ, Qx and Jx are
/// broken.
pub fn is_broken(expressed: &[Card], suit: Suit, count: usize) -> bool {
    if count == 0 || count > 2 {
        return false;
    }

    let holds = |rank: Rank| expressed.contains(&Card::from_parts(suit, rank));

    if holds(Rank::Ace) {
        return false;
    }

    let king = holds(Rank::King);
    let queen = holds(Rank::Queen);
    let jack = holds(Rank::Jack);

    if !(king || queen || jack) {
        return false;
    }

    !(count == 2 && king && !(queen || jack))
}
