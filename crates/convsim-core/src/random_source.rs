//! Random Source — seedable source-bit generation
//!
//! Generates the pseudo-random source frames fed to the encoder, from an
//! explicit seed so every simulation run is reproducible. The generator is
//! xoshiro256** with SplitMix64 seed expansion; the same PRNG backs the
//! binary symmetric channel, so a whole Monte-Carlo sweep is deterministic
//! given its master seed.
//!
//! ## Example
//!
//! ```rust
//! use convsim_core::RandomSource;
//!
//! let mut src = RandomSource::new(42);
//! let frame = src.generate_bits(1000);
//! assert_eq!(frame.len(), 1000);
//! assert_eq!(frame, RandomSource::new(42).generate_bits(1000));
//! ```

/// Pseudo-random number generator (xoshiro256**).
#[derive(Debug, Clone)]
pub(crate) struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub(crate) fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut state = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            state = state.wrapping_add(0x9e3779b97f4a7c15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    #[inline]
    pub(crate) fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f64 in [0, 1).
    #[inline]
    pub(crate) fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Seedable random bit source for simulation frames.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Rng,
}

impl RandomSource {
    /// Create a source from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
        }
    }

    /// Generate one uniform sample in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// Generate a frame of `n` fair random bits.
    pub fn generate_bits(&mut self, n: usize) -> Vec<bool> {
        (0..n).map(|_| self.rng.next_u64() >> 63 == 1).collect()
    }
}
