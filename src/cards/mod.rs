//! Card utilities.
//!
//! Cards are plain integers in [0, 52) wrapped in [`Card`]. The suit is the
//! identifier divided by 13 and the rank is the remainder, ordered low to
//! high with the ace at rank 12.

mod card;
mod suit;

pub use card::Card;
pub use suit::{Rank, Suit};

use crate::error::Result;

/// Number of cards in the deck, and the length of every chromosome.
pub const DECK_SIZE: usize = 52;

/// Number of expressed cards in a hand.
pub const HAND_SIZE: usize = 13;

/// Number of suits.
pub const SUITS: usize = 4;

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Renders cards as a sorted, comma separated list such as `"2C, 10D, AS"`.
///
/// When `score` is given it is appended as a final element.
pub fn format_hand(cards: &[Card], score: Option<f64>) -> String {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    let mut out = sorted
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if let Some(score) = score {
        out.push_str(&format!(", {score}"));
    }
    out
}

/// Parses a whitespace or comma separated list of card names.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hand_sorts() {
        let cards = parse_cards("AS 2C QD 10D").unwrap();
        assert_eq!(format_hand(&cards, None), "2C, 10D, QD, AS");
        assert_eq!(format_hand(&cards, Some(7.0)), "2C, 10D, QD, AS, 7");
    }

    #[test]
    fn test_parse_cards_mixed_separators() {
        let cards = parse_cards("KD, 3D  JS").unwrap();
        assert_eq!(cards.len(), 3);
        assert!(parse_cards("KD, XX").is_err());
    }
}
