//! Verification API
//!
//! Reconstructs a dealt hand from the revealed seeds:
//! seeds -> digests -> keyed hash -> shuffle seed -> shoe -> hand `nonce`.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::hash::SeedDerivation;
use crate::error::VerifyError;
use crate::game::card::Card;
use crate::game::dealer::{Dealer, HandRecord};
use crate::{CLIENT_SEED_LEN, MAX_NONCE, SERVER_SEED_LEN};

/// Inputs of a verification run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Player-chosen seed, exactly 8 characters.
    pub client_seed: String,
    /// Operator seed, exactly 32 characters.
    pub server_seed: String,
    /// 1-based hand index within the shoe.
    pub nonce: u64,
}

impl VerificationRequest {
    /// Create a request.
    pub fn new(client_seed: impl Into<String>, server_seed: impl Into<String>, nonce: u64) -> Self {
        Self {
            client_seed: client_seed.into(),
            server_seed: server_seed.into(),
            nonce,
        }
    }

    /// Check every input constraint, returning the nonce as a hand number.
    pub fn validate(&self) -> Result<u32, VerifyError> {
        validate_client_seed(&self.client_seed)?;
        validate_server_seed(&self.server_seed)?;
        validate_nonce(self.nonce)
    }

    /// Run the verification.
    pub fn verify(&self) -> Result<VerificationResult, VerifyError> {
        verify_hand(&self.client_seed, &self.server_seed, self.nonce)
    }
}

/// Client seed must be exactly 8 characters.
pub fn validate_client_seed(seed: &str) -> Result<(), VerifyError> {
    let len = seed.chars().count();
    if len != CLIENT_SEED_LEN {
        return Err(VerifyError::InvalidClientSeed { len });
    }
    Ok(())
}

/// Server seed must be exactly 32 characters.
pub fn validate_server_seed(seed: &str) -> Result<(), VerifyError> {
    let len = seed.chars().count();
    if len != SERVER_SEED_LEN {
        return Err(VerifyError::InvalidServerSeed { len });
    }
    Ok(())
}

/// Nonce must be in 1..=104.
pub fn validate_nonce(nonce: u64) -> Result<u32, VerifyError> {
    if nonce == 0 || nonce > MAX_NONCE as u64 {
        return Err(VerifyError::InvalidNonce { nonce });
    }
    Ok(nonce as u32)
}

/// Verification output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// MD5 hex of the client seed.
    pub client_seed_digest: String,
    /// MD5 hex of the server seed.
    pub server_seed_digest: String,
    /// HMAC-SHA256 hex the shuffle seed was taken from.
    pub keyed_hash: String,
    /// Seed of the shuffle stream.
    pub shuffle_seed: u64,
    /// Hand number that was verified.
    pub nonce: u32,
    /// The reconstructed hand.
    pub hand: HandRecord,
    /// Cards left in the shoe after this hand.
    pub cards_remaining: usize,
}

impl VerificationResult {
    /// Whether a claimed deal matches the reconstructed one card for card.
    pub fn matches_cards(&self, player: &[u16], banker: &[u16]) -> bool {
        let same = |cards: &[Card], claimed: &[u16]| {
            cards.len() == claimed.len() && cards.iter().zip(claimed).all(|(c, id)| c.id() == *id)
        };
        same(&self.hand.player, player) && same(&self.hand.banker, banker)
    }
}

/// Verify hand `nonce` dealt from the shoe committed by the seed pair.
///
/// Fails on invalid input, or with `DeckExhausted` when the shoe cannot
/// complete hands 1..=nonce. No partial result is returned.
#[instrument(level = "debug", skip_all, fields(nonce = nonce))]
pub fn verify_hand(
    client_seed: &str,
    server_seed: &str,
    nonce: u64,
) -> Result<VerificationResult, VerifyError> {
    validate_client_seed(client_seed)?;
    validate_server_seed(server_seed)?;
    let target = validate_nonce(nonce)?;

    let derivation = SeedDerivation::derive(server_seed, client_seed);
    debug!(
        client_digest = %derivation.client_digest,
        server_digest = %derivation.server_digest,
        keyed_hash = %derivation.keyed_hash,
        shuffle_seed = derivation.shuffle_seed,
        "seeds derived"
    );

    let mut dealer = Dealer::from_seed(derivation.shuffle_seed);
    debug!("shoe shuffled");

    let hand = dealer.play_to(target)?;
    let cards_remaining = dealer.shoe().remaining();
    debug!(
        winner = ?hand.outcome.winner,
        special = ?hand.outcome.special,
        cards_remaining,
        "hand reconstructed"
    );

    Ok(VerificationResult {
        client_seed_digest: derivation.client_digest,
        server_seed_digest: derivation.server_digest,
        keyed_hash: derivation.keyed_hash,
        shuffle_seed: derivation.shuffle_seed,
        nonce: target,
        hand,
        cards_remaining,
    })
}
