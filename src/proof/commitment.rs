//! Server Seed Commitment
//!
//! Before play the operator publishes `SHA-256(server_seed)`. After the
//! seed is revealed anyone can check it against the published hash, so
//! the operator cannot pick a different seed once the client seed is known.

use serde::{Deserialize, Serialize};

use crate::core::hash::sha256_hex;
use crate::error::VerifyError;

/// Published commitment to a server seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSeedCommitment {
    /// Lowercase SHA-256 hex of the server seed.
    pub hash: String,
}

impl ServerSeedCommitment {
    /// Commit to a server seed.
    pub fn commit(server_seed: &str) -> Self {
        Self {
            hash: sha256_hex(server_seed.as_bytes()),
        }
    }

    /// Wrap a published commitment. Case and surrounding whitespace are ignored.
    pub fn from_hex(hash: &str) -> Self {
        Self {
            hash: hash.trim().to_ascii_lowercase(),
        }
    }

    /// Check a revealed server seed against this commitment.
    pub fn verify(&self, server_seed: &str) -> bool {
        sha256_hex(server_seed.as_bytes()) == self.hash
    }
}

/// Check a revealed server seed, failing with `CommitmentMismatch`.
pub fn verify_reveal(commitment: &ServerSeedCommitment, server_seed: &str) -> Result<(), VerifyError> {
    if !commitment.verify(server_seed) {
        return Err(VerifyError::CommitmentMismatch {
            commitment: commitment.hash.clone(),
        });
    }
    Ok(())
}
