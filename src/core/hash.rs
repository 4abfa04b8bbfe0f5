//! Seed Hashing
//!
//! Turns the two committed seeds into the 32-bit shuffle seed:
//! - MD5 digest of each seed (hex, used as key material)
//! - HMAC-SHA256 keyed by the server digest over the client digest
//! - First 8 hex characters of the keyed hash, parsed base-16
//!
//! The HMAC key and message are the ASCII bytes of the hex *strings*,
//! not the raw digest bytes.

use hmac::{Hmac, Mac};
use md5::Md5;
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Hex characters of the keyed hash that form the shuffle seed.
pub const SHUFFLE_SEED_HEX_LEN: usize = 8;

/// MD5 digest of a seed, rendered as 32 lowercase hex characters.
pub fn seed_digest(seed: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(seed.as_bytes());
    hex::encode(hasher.finalize())
}

/// HMAC-SHA256 of `message` keyed by `key`, as 64 lowercase hex characters.
pub fn keyed_hash(key: &str, message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Parse the leading hex characters of a keyed hash into the shuffle seed.
///
/// Returns `None` if the hash is shorter than 8 characters or not hex.
pub fn shuffle_seed_from_hash(keyed_hash_hex: &str) -> Option<u64> {
    let prefix = keyed_hash_hex.get(..SHUFFLE_SEED_HEX_LEN)?;
    u64::from_str_radix(prefix, 16).ok()
}

/// Intermediate values of the seed derivation, kept for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedDerivation {
    /// MD5 hex of the server seed (HMAC key).
    pub server_digest: String,
    /// MD5 hex of the client seed (HMAC message).
    pub client_digest: String,
    /// HMAC-SHA256 hex.
    pub keyed_hash: String,
    /// Seed for the shuffle stream, in `[0, 2^32 - 1]`.
    pub shuffle_seed: u64,
}

impl SeedDerivation {
    /// Run the full derivation for a seed pair.
    pub fn derive(server_seed: &str, client_seed: &str) -> Self {
        let server_digest = seed_digest(server_seed);
        let client_digest = seed_digest(client_seed);
        let keyed_hash = keyed_hash(&server_digest, &client_digest);
        // keyed_hash is always 64 hex chars
        let shuffle_seed = shuffle_seed_from_hash(&keyed_hash).unwrap_or_default();

        Self {
            server_digest,
            client_digest,
            keyed_hash,
            shuffle_seed,
        }
    }
}

/// Derive the shuffle seed for a server/client seed pair.
pub fn derive_shuffle_seed(server_seed: &str, client_seed: &str) -> u64 {
    SeedDerivation::derive(server_seed, client_seed).shuffle_seed
}

/// SHA-256 of arbitrary data as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

// =============================================================================
// TESTS
// =============================================================================
