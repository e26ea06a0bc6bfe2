//! Suits and ranks of a standard 52-card deck.

use crate::error::{EvolutionError, Result};

/// One of the four suits, ordered clubs low to spades high.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs.
    Clubs = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Hearts.
    Hearts = 2,
    /// Spades.
    Spades = 3,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Index of the suit in [0, 4).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter symbol used when rendering hands.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Suit {
    type Err = EvolutionError;

    fn from_str(s: &str) -> Result<Suit> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_symbol(c)
                .ok_or_else(|| EvolutionError::InvalidCard(format!("unknown suit '{s}'"))),
            _ => Err(EvolutionError::InvalidCard(format!("unknown suit '{s}'"))),
        }
    }
}

/// One of the thirteen ranks, ordered deuce low to ace high.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// 10
    Ten = 8,
    /// Jack
    Jack = 9,
    /// Queen
    Queen = 10,
    /// King
    King = 11,
    /// Ace
    Ace = 12,
}

impl Rank {
    /// All ranks in index order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Index of the rank in [0, 13).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label used when rendering hands.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Rank {
    type Err = EvolutionError;

    fn from_str(s: &str) -> Result<Rank> {
        let upper = s.to_ascii_uppercase();
        let rank = match upper.as_str() {
            "T" => Some(Rank::Ten),
            label => Rank::ALL.iter().copied().find(|r| r.label() == label),
        };
        rank.ok_or_else(|| EvolutionError::InvalidCard(format!("unknown rank '{s}'")))
    }
}
