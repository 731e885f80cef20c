//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Random colors and palettes are reproducible: the same seed always
//! produces the same sequence across all platforms (pure integer
//! arithmetic).

/// Xorshift64 deterministic PRNG. Same seed always produces the same
/// sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced
/// with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed
    /// point of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// Uses modulo reduction; the bias is negligible at 64-bit state
    /// width for the 24-bit ranges used here.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }
}
