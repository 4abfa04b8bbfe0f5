//! Verifier configuration.
//!
//! Read from the environment; the binary takes no arguments.

use std::env;

use thiserror::Error;

use crate::proof::commitment::ServerSeedCommitment;
use crate::proof::verify::VerificationRequest;

/// Client seed variable.
pub const ENV_CLIENT_SEED: &str = "BACCARAT_CLIENT_SEED";
/// Server seed variable.
pub const ENV_SERVER_SEED: &str = "BACCARAT_SERVER_SEED";
/// Hand number variable (defaults to 1).
pub const ENV_NONCE: &str = "BACCARAT_NONCE";
/// Optional published server seed commitment.
pub const ENV_COMMITMENT: &str = "BACCARAT_COMMITMENT";
/// Emit the full shoe transcript when `true` or `1`.
pub const ENV_TRANSCRIPT: &str = "BACCARAT_TRANSCRIPT";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset.
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    /// The nonce is not a non-negative integer.
    #[error("BACCARAT_NONCE is not a valid number: {0}")]
    InvalidNonce(String),
}

/// Verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Seeds and hand to verify.
    pub request: VerificationRequest,
    /// Commitment to check the server seed against, if published.
    pub commitment: Option<ServerSeedCommitment>,
    /// Whether to include the whole shoe in the report.
    pub transcript: bool,
}

impl VerifierConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_seed = lookup(ENV_CLIENT_SEED).ok_or(ConfigError::Missing(ENV_CLIENT_SEED))?;
        let server_seed = lookup(ENV_SERVER_SEED).ok_or(ConfigError::Missing(ENV_SERVER_SEED))?;
        let nonce = match lookup(ENV_NONCE) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNonce(raw.clone()))?,
            None => 1,
        };

        Ok(Self {
            request: VerificationRequest::new(client_seed, server_seed, nonce),
            commitment: lookup(ENV_COMMITMENT)
                .filter(|c| !c.trim().is_empty())
                .map(|c| ServerSeedCommitment::from_hex(&c)),
            transcript: lookup(ENV_TRANSCRIPT)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}
