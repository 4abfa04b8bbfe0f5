//! The Shoe
//!
//! Eight standard decks combined into one 416-card dealing source.
//! The shoe is shuffled once, then consumed strictly from the front.
//! Dealt cards never return and the shoe is never reshuffled.

use serde::{Deserialize, Serialize};

use crate::core::rng::DeterministicRng;
use crate::error::VerifyError;
use crate::game::card::{Card, Suit, RANKS, SUITS};

/// Decks in the shoe.
pub const DECKS: usize = 8;

/// Total cards in the shoe (8 x 4 x 13).
pub const SHOE_SIZE: usize = DECKS * SUITS as usize * RANKS as usize;

/// An ordered shoe with a front cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
}

impl Shoe {
    /// The unshuffled shoe: for each deck, for each suit, ranks Ace..King.
    ///
    /// This order is the input to the shuffle. Changing it changes every
    /// permutation, so it must stay fixed.
    pub fn canonical() -> Self {
        let mut cards = Vec::with_capacity(SHOE_SIZE);
        for _ in 0..DECKS {
            for suit in Suit::ALL {
                for rank in 1..=RANKS {
                    if let Some(card) = Card::new(suit, rank) {
                        cards.push(card);
                    }
                }
            }
        }
        Self::from_cards(cards)
    }

    /// The canonical shoe shuffled by the stream seeded with `shuffle_seed`.
    pub fn shuffled(shuffle_seed: u64) -> Self {
        let mut shoe = Self::canonical();
        let mut rng = DeterministicRng::new(shuffle_seed);
        rng.shuffle(&mut shoe.cards);
        shoe
    }

    /// A shoe in the given order, cursor at the front.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// Deal the next card from the front.
    pub fn draw(&mut self) -> Result<Card, VerifyError> {
        let card = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(VerifyError::DeckExhausted {
                needed: 1,
                remaining: 0,
            })?;
        self.position += 1;
        Ok(card)
    }

    /// Deal `count` cards, or none at all if fewer remain.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, VerifyError> {
        let remaining = self.remaining();
        if remaining < count {
            return Err(VerifyError::DeckExhausted {
                needed: count,
                remaining,
            });
        }
        let cards = self.cards[self.position..self.position + count].to_vec();
        self.position += count;
        Ok(cards)
    }

    /// Cards not yet dealt.
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards dealt so far.
    pub fn dealt(&self) -> usize {
        self.position
    }

    /// Full shoe order, including cards already dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Undealt cards, front first.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position.min(self.cards.len())..]
    }
}
