//! Trellis — finite-state-machine description of a convolutional code
//!
//! Derives the full trellis from a generating matrix: for every one of the
//! `2^m` shift-register states and both input bits, the successor state and
//! the n-bit output symbol are computed up front and cached. The state
//! transition is the physical shift-register update (shift the input in,
//! drop the oldest bit) and is independent of the matrix; only the output
//! symbols depend on the taps.
//!
//! A `Trellis` is immutable after construction and is shared, typically via
//! `Arc`, between the encoder and any number of concurrent decoder calls.
//! Precomputing it once is what keeps repeated Viterbi decoding cheap.
//!
//! ## Example
//!
//! ```rust
//! use convsim_core::{GeneratingMatrix, Trellis};
//!
//! let g = GeneratingMatrix::rate_half_m2();
//! let trellis = Trellis::new(&g);
//! assert_eq!(trellis.num_states(), 4);
//! // From the zero state, input 1 moves to state 0b10 and emits (1, 1)
//! assert_eq!(trellis.next_state(0, true), 0b10);
//! assert_eq!(trellis.output(0, true), &[true, true]);
//! ```

use crate::generating_matrix::GeneratingMatrix;

/// Cached state machine of a rate-1/n convolutional encoder.
///
/// State integers pack the register contents with the most recent input in
/// the most significant of the `m` state bits and the oldest in bit 0.
/// Transitions use the register word `reg = input << m | state`; each
/// matrix row becomes a bitmask over that word, so an output bit is the
/// parity of `reg & mask` and the successor state is `reg >> 1`.
#[derive(Debug, Clone)]
pub struct Trellis {
    memory: usize,
    n_outputs: usize,
    num_states: usize,
    /// next_states[state][input]
    next_states: Vec<[usize; 2]>,
    /// outputs[state][input] = n-bit output symbol in row order
    outputs: Vec<[Vec<bool>; 2]>,
}

impl Trellis {
    /// Build the complete trellis for a generating matrix.
    ///
    /// Both maps are total: every `(state, input)` pair over the full
    /// `2^m x 2` domain is computed here, never lazily.
    pub fn new(matrix: &GeneratingMatrix) -> Self {
        let memory = matrix.memory();
        let n_outputs = matrix.n_outputs();
        let num_states = 1usize << memory;

        // Matrix column c taps the register bit shifted in c steps ago,
        // which lives at bit (m - c) of the register word.
        let masks: Vec<u64> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &tap)| tap == 1)
                    .fold(0u64, |mask, (c, _)| mask | 1u64 << (memory - c))
            })
            .collect();

        let mut next_states = Vec::with_capacity(num_states);
        let mut outputs = Vec::with_capacity(num_states);

        for state in 0..num_states {
            let mut nexts = [0usize; 2];
            let mut outs: [Vec<bool>; 2] = [Vec::new(), Vec::new()];

            for input in 0..2usize {
                let reg = (input as u64) << memory | state as u64;
                outs[input] = masks
                    .iter()
                    .map(|&mask| (reg & mask).count_ones() & 1 == 1)
                    .collect();
                nexts[input] = (reg >> 1) as usize;
            }

            next_states.push(nexts);
            outputs.push(outs);
        }

        Self {
            memory,
            n_outputs,
            num_states,
            next_states,
            outputs,
        }
    }

    /// Encoder memory m.
    pub fn memory(&self) -> usize {
        self.memory
    }

    /// Code bits emitted per input bit (n).
    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    /// Number of trellis states, `2^m`.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Successor state for `(state, input)`. Independent of the matrix.
    #[inline]
    pub fn next_state(&self, state: usize, input: bool) -> usize {
        self.next_states[state][input as usize]
    }

    /// The n-bit output symbol for `(state, input)`, in row order.
    #[inline]
    pub fn output(&self, state: usize, input: bool) -> &[bool] {
        &self.outputs[state][input as usize]
    }

    /// All transitions as `(from_state, to_state, input, output_bits)`,
    /// useful for inspection and for testing totality.
    pub fn transitions(&self) -> Vec<(usize, usize, bool, Vec<bool>)> {
        let mut transitions = Vec::with_capacity(self.num_states * 2);
        for state in 0..self.num_states {
            for input in [false, true] {
                transitions.push((
                    state,
                    self.next_state(state, input),
                    input,
                    self.output(state, input).to_vec(),
                ));
            }
        }
        transitions
    }
}
