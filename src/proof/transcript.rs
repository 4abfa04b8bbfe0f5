//! Shoe Transcript
//!
//! Full record of one shoe: its shuffled order and every hand dealt from
//! it, either up to a given hand or until the shoe runs out.

use serde::{Deserialize, Serialize};

use crate::core::hash::derive_shuffle_seed;
use crate::error::VerifyError;
use crate::game::card::Card;
use crate::game::dealer::{Dealer, HandRecord};
use crate::game::shoe::Shoe;
use crate::proof::verify::{validate_client_seed, validate_server_seed};

/// Current transcript version.
pub const TRANSCRIPT_VERSION: u8 = 1;

/// Complete record of a shoe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeTranscript {
    /// Version for forward compatibility.
    pub version: u8,

    /// Seed the shoe was shuffled with.
    pub shuffle_seed: u64,

    /// Shoe order after the shuffle, front first.
    pub shoe: Vec<Card>,

    /// Hands in deal order, numbered from 1.
    pub hands: Vec<HandRecord>,

    /// True if recording stopped because the shoe could not complete a hand.
    pub exhausted: bool,
}

impl ShoeTranscript {
    /// Record the shoe committed by a seed pair.
    ///
    /// With `limit`, stops after that many hands. Without, deals until the
    /// shoe runs out.
    pub fn record(
        client_seed: &str,
        server_seed: &str,
        limit: Option<u32>,
    ) -> Result<Self, VerifyError> {
        validate_client_seed(client_seed)?;
        validate_server_seed(server_seed)?;
        Ok(Self::from_shuffle_seed(
            derive_shuffle_seed(server_seed, client_seed),
            limit,
        ))
    }

    /// Record the shoe for an already derived shuffle seed.
    pub fn from_shuffle_seed(shuffle_seed: u64, limit: Option<u32>) -> Self {
        let shoe = Shoe::shuffled(shuffle_seed);
        let order = shoe.cards().to_vec();
        let mut dealer = Dealer::new(shoe);

        let mut hands = Vec::new();
        let mut exhausted = false;
        while limit.map_or(true, |max| dealer.hands_dealt() < max) {
            match dealer.deal_hand() {
                Ok(hand) => hands.push(hand),
                Err(_) => {
                    exhausted = true;
                    break;
                }
            }
        }

        Self {
            version: TRANSCRIPT_VERSION,
            shuffle_seed,
            shoe: order,
            hands,
            exhausted,
        }
    }

    /// Look up a hand by its 1-based number.
    pub fn hand(&self, number: u32) -> Option<&HandRecord> {
        let index = number.checked_sub(1)? as usize;
        self.hands.get(index)
    }

    /// Cards consumed by the recorded hands.
    pub fn cards_used(&self) -> usize {
        self.hands
            .iter()
            .map(|h| h.player.len() + h.banker.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::shoe::SHOE_SIZE;
    use crate::proof::verify::verify_hand;

    const CLIENT: &str = "a1b2c3d4";
    const SERVER: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_full_shoe() {
        let transcript = ShoeTranscript::record(CLIENT, SERVER, None).unwrap();
        assert_eq!(transcript.shuffle_seed, 2118994888);
        assert_eq!(transcript.shoe.len(), SHOE_SIZE);
        assert_eq!(transcript.hands.len(), 86);
        assert!(transcript.exhausted);
        assert_eq!(transcript.cards_used(), SHOE_SIZE - 1);
    }

    #[test]
    fn test_limited_shoe() {
        let transcript = ShoeTranscript::record(CLIENT, SERVER, Some(5)).unwrap();
        assert_eq!(transcript.hands.len(), 5);
        assert!(!transcript.exhausted);
        assert!(transcript.hand(0).is_none());
        assert!(transcript.hand(6).is_none());
    }

    #[test]
    fn test_hands_agree_with_verification() {
        let transcript = ShoeTranscript::record(CLIENT, SERVER, Some(20)).unwrap();
        for nonce in [1u32, 10, 13, 20] {
            let verified = verify_hand(CLIENT, SERVER, nonce as u64).unwrap();
            assert_eq!(transcript.hand(nonce), Some(&verified.hand));
        }
    }

    #[test]
    fn test_rejects_bad_seeds() {
        assert_eq!(
            ShoeTranscript::record("short", SERVER, None),
            Err(VerifyError::InvalidClientSeed { len: 5 })
        );
        assert_eq!(
            ShoeTranscript::record(CLIENT, "", None),
            Err(VerifyError::InvalidServerSeed { len: 0 })
        );
    }

    #[test]
    fn test_json_round_trip_preserves_hands() {
        let transcript = ShoeTranscript::record(CLIENT, SERVER, Some(3)).unwrap();
        let json = serde_json::to_string(&transcript).unwrap();
        let parsed: ShoeTranscript = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, transcript);
    }
}
