//! Binary Symmetric Channel — memoryless bit-flip channel model
//!
//! The classic BSC: each transmitted bit is flipped independently with
//! probability `pe` and passed through unchanged otherwise. The output
//! always has the same length as the input. Noise draws come from a seeded
//! PRNG, so a given `(pe, seed)` pair reproduces the same error pattern on
//! every run.
//!
//! ## Example
//!
//! ```rust
//! use convsim_core::BinarySymmetricChannel;
//!
//! let clean = vec![true; 64];
//! let mut ch = BinarySymmetricChannel::new(0.0, 42);
//! assert_eq!(ch.transmit(&clean), clean);
//!
//! let mut ch = BinarySymmetricChannel::new(1.0, 42);
//! assert!(ch.transmit(&clean).iter().all(|&b| !b));
//! ```

use crate::random_source::Rng;

/// Memoryless binary symmetric channel.
#[derive(Debug, Clone)]
pub struct BinarySymmetricChannel {
    pe: f64,
    rng: Rng,
}

impl BinarySymmetricChannel {
    /// Create a channel with crossover probability `pe` and a noise seed.
    ///
    /// # Panics
    ///
    /// Panics if `pe` is not in [0, 1].
    pub fn new(pe: f64, seed: u64) -> Self {
        assert!(
            (0.0..=1.0).contains(&pe),
            "Crossover probability must be in [0, 1], got {}",
            pe
        );
        Self {
            pe,
            rng: Rng::new(seed),
        }
    }

    /// Crossover probability.
    pub fn pe(&self) -> f64 {
        self.pe
    }

    /// Transmit a bit sequence, flipping each bit independently with
    /// probability `pe`. The output length equals the input length.
    pub fn transmit(&mut self, bits: &[bool]) -> Vec<bool> {
        bits.iter()
            .map(|&b| {
                if self.rng.next_f64() < self.pe {
                    !b
                } else {
                    b
                }
            })
            .collect()
    }
}
