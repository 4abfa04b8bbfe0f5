//! Fairness Proofs
//!
//! Lets a player check a dealt hand after the server seed is revealed:
//! - Verification of a single hand by deterministic replay
//! - Server seed commitment check
//! - Full shoe transcripts
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  verify.rs       - Input validation + hand reconstruction   │
//! │  commitment.rs   - SHA-256 commitment to the server seed    │
//! │  transcript.rs   - Every hand dealt from one shoe           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod transcript;
pub mod verify;

// Re-export key types
pub use commitment::{verify_reveal, ServerSeedCommitment};
pub use transcript::ShoeTranscript;
pub use verify::{verify_hand, VerificationRequest, VerificationResult};
