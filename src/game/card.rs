//! Card Identifiers
//!
//! A card is the integer `suit * 100 + rank`, suit in 1..=4 and rank in
//! 1..=13. The eight copies of a (suit, rank) pair in the shoe share the
//! same identifier and are interchangeable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;

/// Number of suits in a deck.
pub const SUITS: u16 = 4;

/// Number of ranks per suit (Ace..King).
pub const RANKS: u16 = 13;

/// Card suit, in the order used to build the canonical shoe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Suit {
    /// ♦
    Diamonds = 1,
    /// ♣
    Clubs = 2,
    /// ♥
    Hearts = 3,
    /// ♠
    Spades = 4,
}

impl Suit {
    /// All suits in shoe order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Suit from its 1-based index.
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Hearts),
            4 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Display symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// A single card, stored as its integer identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Card(u16);

impl Card {
    /// Create a card from suit and rank (1 = Ace .. 13 = King).
    ///
    /// Returns `None` for a rank outside 1..=13.
    pub fn new(suit: Suit, rank: u16) -> Option<Self> {
        if (1..=RANKS).contains(&rank) {
            Some(Self(suit as u16 * 100 + rank))
        } else {
            None
        }
    }

    /// Parse a raw identifier such as `113` (♦K).
    pub fn from_id(id: u16) -> Option<Self> {
        let suit = Suit::from_index(id / 100)?;
        Self::new(suit, id % 100)
    }

    /// Raw identifier.
    #[inline]
    pub const fn id(self) -> u16 {
        self.0
    }

    /// Suit of this card.
    pub fn suit(self) -> Suit {
        // Constructors only admit suits 1..=4
        Suit::from_index(self.0 / 100).unwrap_or(Suit::Spades)
    }

    /// Rank, 1 (Ace) through 13 (King).
    #[inline]
    pub const fn rank(self) -> u16 {
        self.0 % 100
    }

    /// Baccarat point value: Ace is 1, 2-9 face value, 10/J/Q/K are 0.
    #[inline]
    pub const fn value(self) -> u8 {
        point_value(self.0)
    }
}

impl TryFrom<u16> for Card {
    type Error = VerifyError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Card::from_id(id).ok_or(VerifyError::InvalidCard(id))
    }
}

impl From<Card> for u16 {
    fn from(card: Card) -> u16 {
        card.0
    }
}

/// Point value of a raw card identifier.
#[inline]
pub const fn point_value(id: u16) -> u8 {
    let rank = id % 100;
    if rank >= 10 {
        0
    } else {
        rank as u8
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank() {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        };
        write!(f, "{}{}", self.suit().symbol(), rank)
    }
}

/// Render cards as space-separated labels, e.g. `♦A ♣10 ♠K`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_identifiers() {
        let king = Card::new(Suit::Diamonds, 13).unwrap();
        assert_eq!(king.id(), 113);
        assert_eq!(king.suit(), Suit::Diamonds);
        assert_eq!(king.rank(), 13);

        assert_eq!(Card::from_id(401), Card::new(Suit::Spades, 1));
        assert_eq!(Card::from_id(100), None);
        assert_eq!(Card::from_id(114), None);
        assert_eq!(Card::from_id(501), None);
        assert_eq!(Card::new(Suit::Hearts, 0), None);
    }

    #[test]
    fn test_point_values() {
        let values: Vec<u8> = (1..=13)
            .map(|rank| Card::new(Suit::Clubs, rank).unwrap().value())
            .collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0, 0]);
        assert_eq!(point_value(210), 0);
        assert_eq!(point_value(309), 9);
    }

    #[test]
    fn test_labels() {
        let label = |id| Card::from_id(id).unwrap().to_string();
        assert_eq!(label(101), "♦A");
        assert_eq!(label(210), "♣10");
        assert_eq!(label(311), "♥J");
        assert_eq!(label(412), "♠Q");
        assert_eq!(label(413), "♠K");
        assert_eq!(label(307), "♥7");

        let cards = [101, 210, 413].map(|id| Card::from_id(id).unwrap());
        assert_eq!(format_cards(&cards), "♦A ♣10 ♠K");
        assert_eq!(format_cards(&[]), "");
    }

    #[test]
    fn test_serde_as_plain_integer() {
        let card = Card::from_id(212).unwrap();
        assert_eq!(serde_json::to_string(&card).unwrap(), "212");
        let back: Card = serde_json::from_str("212").unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("515").is_err());
        assert_eq!(Card::try_from(99), Err(VerifyError::InvalidCard(99)));
    }
}
