//! # Baccarat Fair
//!
//! Provably fair verification for an 8-deck baccarat shoe.
//!
//! Given the revealed server seed, the client seed and a hand index
//! (nonce), reconstructs the exact shuffled shoe and the exact cards dealt
//! for that hand.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     BACCARAT FAIR                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── hash.rs     - MD5 seed digests, HMAC-SHA256 seed        │
//! │  └── rng.rs      - Xorshift128+ stream + Fisher-Yates        │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── card.rs     - Card identifiers and point values         │
//! │  ├── shoe.rs     - 416-card shoe, canonical order            │
//! │  ├── rules.rs    - Naturals, third-card tableau, settlement  │
//! │  └── dealer.rs   - Round state machine, hand sequencing      │
//! │                                                              │
//! │  proof/          - Player-facing verification                │
//! │  ├── verify.rs   - Input validation + hand reconstruction    │
//! │  ├── commitment.rs - Server seed commitment                  │
//! │  └── transcript.rs - Whole-shoe record                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Identical seeds always produce the identical shoe and hands, here and
//! in every other conforming verifier:
//! - Digests and keyed hash are computed over the hex strings
//! - The stream uses exact 64-bit wrapping arithmetic
//! - The shoe is built in one fixed order before shuffling
//!
//! ```
//! use baccarat_fair::verify_hand;
//!
//! let result = verify_hand("a1b2c3d4", "0123456789abcdef0123456789abcdef", 1).unwrap();
//! assert_eq!(result.shuffle_seed, 2118994888);
//! assert_eq!(result.hand.outcome.to_string(), "Player Win");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use crate::core::rng::DeterministicRng;
pub use config::VerifierConfig;
pub use error::VerifyError;
pub use game::{Card, HandRecord, Outcome, Shoe, Special, Winner};
pub use proof::{verify_hand, ShoeTranscript, VerificationRequest, VerificationResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Required client seed length, in characters.
pub const CLIENT_SEED_LEN: usize = 8;

/// Required server seed length, in characters.
pub const SERVER_SEED_LEN: usize = 32;

/// Highest hand index a shoe can be asked for (416 cards / 4).
pub const MAX_NONCE: u32 = 104;
