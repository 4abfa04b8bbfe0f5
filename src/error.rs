//! Verification errors.

use thiserror::Error;

use crate::{CLIENT_SEED_LEN, MAX_NONCE, SERVER_SEED_LEN};

/// Errors that abort a verification run.
///
/// None of these are retried internally and no partial hand is returned
/// alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Client seed is empty or not exactly 8 characters.
    #[error("client seed must be exactly {} characters, got {len}", CLIENT_SEED_LEN)]
    InvalidClientSeed {
        /// Length of the rejected seed, in characters.
        len: usize,
    },

    /// Server seed is empty or not exactly 32 characters.
    #[error("server seed must be exactly {} characters, got {len}", SERVER_SEED_LEN)]
    InvalidServerSeed {
        /// Length of the rejected seed, in characters.
        len: usize,
    },

    /// Nonce outside 1..=104.
    #[error("nonce must be in 1..={}, got {nonce}", MAX_NONCE)]
    InvalidNonce {
        /// The rejected nonce.
        nonce: u64,
    },

    /// The shoe ran out before the requested cards could be dealt.
    #[error("not enough cards left in the shoe: needed {needed}, {remaining} remaining")]
    DeckExhausted {
        /// Cards the operation needed.
        needed: usize,
        /// Cards left in the shoe.
        remaining: usize,
    },

    /// Identifier is not a valid `suit * 100 + rank` card.
    #[error("invalid card identifier: {0}")]
    InvalidCard(u16),

    /// Revealed server seed does not match the published commitment.
    #[error("server seed does not match commitment {commitment}")]
    CommitmentMismatch {
        /// The published commitment hex.
        commitment: String,
    },
}
