//! Integer card identifiers.

use super::suit::{Rank, Suit};
use super::{DECK_SIZE, RANKS_PER_SUIT};
use crate::error::{EvolutionError, Result};

/// A card identified by an integer in [0, 52).
///
/// Cards are numbered suit by suit: `0` is the two of clubs and `51` the ace
/// of spades, so `suit = id / 13` and `rank = id % 13`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    /// Builds a card from its identifier.
    pub fn new(id: u8) -> Result<Card> {
        if usize::from(id) < DECK_SIZE {
            Ok(Card(id))
        } else {
            Err(EvolutionError::InvalidCard(format!("card id {id} out of range")))
        }
    }

    /// Builds a card from suit and rank.
    pub fn from_parts(suit: Suit, rank: Rank) -> Card {
        // both indices are bounded by their enums, so the id is < 52
        Card((suit.index() * RANKS_PER_SUIT + rank.index()) as u8)
    }

    /// Every card of the deck in ascending id order.
    pub fn deck() -> [Card; DECK_SIZE] {
        std::array::from_fn(|i| Card(i as u8))
    }

    /// The card identifier.
    pub fn id(self) -> u8 {
        self.0
    }

    /// The identifier as an index into deck-sized tables.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The card's suit.
    pub fn suit(self) -> Suit {
        Suit::ALL[self.index() / RANKS_PER_SUIT]
    }

    /// The card's rank.
    pub fn rank(self) -> Rank {
        Rank::ALL[self.index() % RANKS_PER_SUIT]
    }
}

impl TryFrom<u8> for Card {
    type Error = EvolutionError;

    fn try_from(id: u8) -> Result<Card> {
        Card::new(id)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// Parses names like `"QD"`, `"10C"` or `"Ts"`: rank first, suit letter last.
impl std::str::FromStr for Card {
    type Err = EvolutionError;

    fn from_str(s: &str) -> Result<Card> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .filter(|&i| i > 0)
            .ok_or_else(|| EvolutionError::InvalidCard(format!("cannot parse card '{s}'")))?;
        let rank: Rank = s[..split].parse()?;
        let suit: Suit = s[split..].parse()?;
        Ok(Card::from_parts(suit, rank))
    }
}
