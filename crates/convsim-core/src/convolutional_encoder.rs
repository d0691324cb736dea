//! Convolutional Encoder — trellis walk with zero-flush termination
//!
//! Encodes a bit sequence by walking the shared [`Trellis`]: starting from
//! the all-zero state, each input bit emits the n-bit output symbol of the
//! current transition and advances the register. The terminated mode
//! appends `m` zero tail bits after the data ("zero-flush"), driving the
//! encoder back to the all-zero state so the decoder can rely on a known
//! terminal state. Tail-biting is deliberately not offered; the
//! termination policy of this library is zero-flush, fixed and documented.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use convsim_core::{ConvolutionalEncoder, GeneratingMatrix, Trellis};
//!
//! let trellis = Arc::new(Trellis::new(&GeneratingMatrix::rate_half_m2()));
//! let mut encoder = ConvolutionalEncoder::new(trellis);
//! let coded = encoder.encode_terminated(&[true, false, true, true]);
//! // n * (len + m) = 2 * (4 + 2)
//! assert_eq!(coded.len(), 12);
//! assert_eq!(encoder.state(), 0);
//! ```

use std::sync::Arc;

use crate::trellis::Trellis;

/// Rate-1/n convolutional encoder over a shared, read-only trellis.
///
/// Encoding is deterministic: the same input always produces the same
/// output. The running state is the only mutable part and is reset by the
/// terminated mode, so a single encoder can be reused across frames.
#[derive(Debug, Clone)]
pub struct ConvolutionalEncoder {
    trellis: Arc<Trellis>,
    state: usize,
}

impl ConvolutionalEncoder {
    /// Create an encoder in the all-zero state.
    pub fn new(trellis: Arc<Trellis>) -> Self {
        Self { trellis, state: 0 }
    }

    /// Encode bits continuously. The state carries over between calls and
    /// no tail is appended; output length is `bits.len() * n`.
    pub fn encode(&mut self, bits: &[bool]) -> Vec<bool> {
        let n = self.trellis.n_outputs();
        let mut output = Vec::with_capacity(bits.len() * n);
        for &bit in bits {
            output.extend_from_slice(self.trellis.output(self.state, bit));
            self.state = self.trellis.next_state(self.state, bit);
        }
        output
    }

    /// Encode a frame with the zero-flush termination policy: reset to the
    /// all-zero state, encode the data bits, then feed `m` zero tail bits,
    /// emitting their outputs too.
    ///
    /// Output length is `n * (bits.len() + m)` and the encoder finishes in
    /// the all-zero state.
    pub fn encode_terminated(&mut self, bits: &[bool]) -> Vec<bool> {
        self.reset();
        let n = self.trellis.n_outputs();
        let tail = self.trellis.memory();
        let mut output = Vec::with_capacity((bits.len() + tail) * n);

        for &bit in bits {
            output.extend_from_slice(self.trellis.output(self.state, bit));
            self.state = self.trellis.next_state(self.state, bit);
        }
        for _ in 0..tail {
            output.extend_from_slice(self.trellis.output(self.state, false));
            self.state = self.trellis.next_state(self.state, false);
        }

        output
    }

    /// Current shift-register state.
    pub fn state(&self) -> usize {
        self.state
    }

    /// Reset the register to the all-zero state.
    pub fn reset(&mut self) {
        self.state = 0;
    }

    /// The trellis this encoder walks.
    pub fn trellis(&self) -> &Arc<Trellis> {
        &self.trellis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generating_matrix::GeneratingMatrix;

    fn rate_half_trellis() -> Arc<Trellis> {
        Arc::new(Trellis::new(&GeneratingMatrix::rate_half_m2()))
    }

    #[test]
    fn test_known_continuous_sequence() {
        // G = [[1,0,1],[1,1,1]], input 1,0,1:
        // t0: state 00, in 1 -> out (1,1), state 10
        // t1: state 10, in 0 -> out (0,1), state 01
        // t2: state 01, in 1 -> out (0,0), state 10
        let mut enc = ConvolutionalEncoder::new(rate_half_trellis());
        let coded = enc.encode(&[true, false, true]);
        assert_eq!(coded, vec![true, true, false, true, false, false]);
        assert_eq!(enc.state(), 0b10);
    }

    #[test]
    fn test_terminated_known_sequence() {
        // Source 1,0,1,1 plus two flush zeros yields six symbol groups:
        // 11 01 00 10 10 11
        let mut enc = ConvolutionalEncoder::new(rate_half_trellis());
        let coded = enc.encode_terminated(&[true, false, true, true]);
        assert_eq!(
            coded,
            vec![
                true, true, false, true, false, false, true, false, true, false, true,
                true
            ]
        );
        assert_eq!(enc.state(), 0);
    }

    #[test]
    fn test_terminated_length_law() {
        let half = ConvolutionalEncoder::new(rate_half_trellis());
        let third = ConvolutionalEncoder::new(Arc::new(Trellis::new(
            &GeneratingMatrix::rate_third_m2(),
        )));
        for len in [0usize, 1, 7, 50] {
            let bits = vec![true; len];
            for mut enc in [half.clone(), third.clone()] {
                let n = enc.trellis().n_outputs();
                let m = enc.trellis().memory();
                assert_eq!(enc.encode_terminated(&bits).len(), n * (len + m));
                assert_eq!(enc.state(), 0);
            }
        }
    }

    #[test]
    fn test_all_zero_input() {
        let mut enc = ConvolutionalEncoder::new(rate_half_trellis());
        let coded = enc.encode_terminated(&[false; 16]);
        assert!(coded.iter().all(|&b| !b));
    }

    #[test]
    fn test_deterministic() {
        let mut a = ConvolutionalEncoder::new(rate_half_trellis());
        let mut b = ConvolutionalEncoder::new(rate_half_trellis());
        let bits = vec![true, true, false, true, false, false, true];
        assert_eq!(a.encode_terminated(&bits), b.encode_terminated(&bits));
    }

    #[test]
    fn test_chunked_continuous_encoding_matches() {
        let bits = vec![true, false, true, true, false, false, true, false, true];
        let mut whole = ConvolutionalEncoder::new(rate_half_trellis());
        let coded_whole = whole.encode(&bits);

        let mut chunked = ConvolutionalEncoder::new(rate_half_trellis());
        let mut coded_chunked = chunked.encode(&bits[..4]);
        coded_chunked.extend(chunked.encode(&bits[4..]));

        assert_eq!(coded_whole, coded_chunked);
        assert_eq!(whole.state(), chunked.state());
    }

    #[test]
    fn test_terminated_resets_previous_state() {
        let mut enc = ConvolutionalEncoder::new(rate_half_trellis());
        enc.encode(&[true, true, true]);
        assert_ne!(enc.state(), 0);
        let coded = enc.encode_terminated(&[true, false, true, true]);

        let mut fresh = ConvolutionalEncoder::new(rate_half_trellis());
        assert_eq!(coded, fresh.encode_terminated(&[true, false, true, true]));
    }
}
