//! Deterministic Random Number Generator
//!
//! Xorshift128+ stream driving the shoe shuffle.
//! Given the same seed, produces an identical sequence on all platforms,
//! and the same sequence as every other verifier of this game.

use serde::{Deserialize, Serialize};

/// 2^64 as an `f64` (exactly representable).
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Deterministic PRNG using the Xorshift128+ algorithm.
///
/// # Determinism Guarantee
///
/// Both state words start equal to the seed. There is no SplitMix
/// expansion and no zero-state guard: seed `0` yields an all-zero
/// stream, which is what the published shuffle algorithm does.
///
/// # Example
///
/// ```
/// use baccarat_fair::core::rng::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// assert_eq!(rng.next_u64(), 103558168185); // Always the same!
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl DeterministicRng {
    /// Create a new RNG with both state words set to `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: [seed, seed] }
    }

    /// Advance the state and return the 64-bit wrapping sum of both words.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];

        self.state[0] = s0;
        s1 ^= s1 << 23;
        s1 ^= s1 >> 17;
        s1 ^= s0;
        s1 ^= s0 >> 26;
        self.state[1] = s1;

        self.state[0].wrapping_add(self.state[1])
    }

    /// Generate the next value in `[0, 1)`: `next_u64() / 2^64`.
    ///
    /// The `u64 -> f64` conversion rounds to nearest-even; the division by
    /// a power of two is exact.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u64() as f64 / TWO_POW_64
    }

    /// Generate an index in `[0, bound)` as `floor(next_f64() * bound)`.
    ///
    /// Sums within 2^10 of 2^64 round up to `1.0`; the result is clamped
    /// to `bound - 1` for those.
    #[inline]
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let scaled = (self.next_f64() * bound as f64).floor() as usize;
        scaled.min(bound - 1)
    }

    /// Shuffle a slice in place using Fisher-Yates, highest index first.
    ///
    /// Draws exactly `len - 1` values from the stream.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        for i in (1..len).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> [u64; 2] {
        self.state
    }

    /// Restore from saved state.
    pub fn set_state(&mut self, state: [u64; 2]) {
        self.state = state;
    }
}

// =============================================================================
// TESTS
// =============================================================================
