//! Small pseudo-random source for target sampling.
//!
//! Movement targets only need to look irregular to a human, so a 32-bit
//! xorshift generator is plenty. The boot seed is folded from a block of
//! uninitialised RAM; words that read all-zero or all-one are skipped
//! because freshly powered SRAM banks can come up stuck at either rail.

/// Seed used when boot noise yields nothing usable.
pub const FALLBACK_SEED: u32 = 0x6A77_1DEA;

/// Xorshift32 PRNG (Marsaglia triplet 13/17/5).
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator from `seed`; a zero seed (the one fixed point of
    /// xorshift) falls back to [`FALLBACK_SEED`].
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    pub fn next_u16(&mut self) -> u16 {
        // Upper half mixes faster than the low bits.
        (self.next_u32() >> 16) as u16
    }
}

/// Fold boot-time RAM noise into a seed.
///
/// XORs together every word that is neither all-zero nor all-one. Returns
/// [`FALLBACK_SEED`] when no word qualifies or the fold cancels to zero.
pub fn seed_from_noise(words: &[u32]) -> u32 {
    let mut seed = 0u32;
    for &w in words {
        if w != 0 && w != u32::MAX {
            seed ^= w;
        }
    }
    if seed == 0 {
        FALLBACK_SEED
    } else {
        seed
    }
}
