//! Core deterministic primitives.
//!
//! Everything in this module must be bit-exact across implementations.
//! A verifier written in any language has to derive the same shuffle seed
//! and the same stream from the same seeds.

pub mod hash;
pub mod rng;

// Re-export core types
pub use hash::{derive_shuffle_seed, keyed_hash, seed_digest, SeedDerivation};
pub use rng::DeterministicRng;
