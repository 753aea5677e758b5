//! Deterministic PRNG for dungeon generation and AI tiebreaks.

use serde::{Deserialize, Serialize};

/// Deterministic PRNG using xorshift64.
///
/// Serializable so a loaded game resumes the same random stream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        // Ensure non-zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate next random u64.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate random u32 in `[0, max)`. Returns 0 when `max` is 0.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (self.next_u64() % u64::from(max)) as u32
    }

    /// Generate random u16 in `[min, max)`. Returns `min` when the range is empty.
    #[allow(clippy::cast_possible_truncation)]
    pub fn range_u16(&mut self, min: u16, max: u16) -> u16 {
        if max <= min {
            return min;
        }
        min + self.next_u32(u32::from(max - min)) as u16
    }

    /// Return `true` with probability `percent / 100`.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_u32(100) < percent
    }
}
