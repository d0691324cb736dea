//! Viterbi Decoder — hard-decision maximum-likelihood decoding
//!
//! Finds the most likely transmitted bit sequence given a possibly
//! corrupted coded sequence, by dynamic programming over the shared
//! [`Trellis`]: the path metric of a state at time t is the minimum
//! accumulated Hamming distance of any path reaching it, and traceback
//! along the recorded survivors reconstructs the input bits. Complexity is
//! `O(T * 2^m)` in time and space for T symbol groups, which is the
//! dominant cost of a BER sweep and the reason the trellis is built once
//! and shared read-only across decode calls.
//!
//! Decoding assumes the encoder's zero-flush termination: the path starts
//! in the all-zero state and the `m` tail decisions are stripped from the
//! returned bits, so the output has exactly the source length.
//!
//! Tie-break rule, fixed so ties decode reproducibly: candidate
//! transitions are examined in ascending `(state, input)` order and only a
//! strictly smaller metric replaces the survivor, so an equal-metric path
//! through input 0 (or through the lower predecessor state) always wins.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use convsim_core::{ConvolutionalEncoder, GeneratingMatrix, Trellis, ViterbiDecoder};
//!
//! let trellis = Arc::new(Trellis::new(&GeneratingMatrix::rate_half_m2()));
//! let data = vec![true, false, true, true];
//! let mut coded = ConvolutionalEncoder::new(trellis.clone()).encode_terminated(&data);
//! coded[3] = !coded[3]; // one channel error
//!
//! let outcome = ViterbiDecoder::new(trellis).decode(&coded).unwrap();
//! assert_eq!(outcome.bits, data);
//! assert!(outcome.terminated);
//! ```

use std::sync::Arc;

use crate::trellis::Trellis;
use crate::types::{CodingError, CodingResult};

/// Result of one decode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Decoded source bits, with the `m` tail decisions stripped. Same
    /// length as the original source frame.
    pub bits: Vec<bool>,
    /// Accumulated Hamming distance of the winning path.
    pub path_metric: u32,
    /// True when traceback started from the all-zero state, as a
    /// zero-flushed frame requires. False reports the non-fatal
    /// unreachable-terminal-state condition: the frame was corrupted
    /// beyond recovery of its termination, and `bits` is the best-effort
    /// minimum-metric result.
    pub terminated: bool,
}

/// Hard-decision Viterbi decoder over a shared, read-only trellis.
///
/// The decoder itself holds no mutable state; all working storage is owned
/// by a single `decode` invocation and discarded after traceback, so one
/// decoder may serve arbitrarily many concurrent calls.
#[derive(Debug, Clone)]
pub struct ViterbiDecoder {
    trellis: Arc<Trellis>,
}

impl ViterbiDecoder {
    /// Create a decoder for the given trellis.
    pub fn new(trellis: Arc<Trellis>) -> Self {
        Self { trellis }
    }

    /// Decode a received sequence back to source bits.
    ///
    /// Fails with [`CodingError::LengthMismatch`] if the length is not a
    /// multiple of the n code bits per step, or leaves fewer steps than
    /// the `m` tail steps of a terminated frame. No partial output is
    /// produced on that path.
    pub fn decode(&self, received: &[bool]) -> CodingResult<DecodeOutcome> {
        let n = self.trellis.n_outputs();
        let memory = self.trellis.memory();
        let num_states = self.trellis.num_states();

        if received.len() % n != 0 || received.len() / n < memory {
            return Err(CodingError::LengthMismatch {
                len: received.len(),
                n,
                memory,
            });
        }
        let num_steps = received.len() / n;

        // Forward pass: path metric 0 for the all-zero start state,
        // unreachable for every other state.
        let mut metrics = vec![u32::MAX; num_states];
        metrics[0] = 0;

        let mut survivors: Vec<Vec<usize>> = Vec::with_capacity(num_steps);
        let mut decisions: Vec<Vec<bool>> = Vec::with_capacity(num_steps);

        for step in 0..num_steps {
            let group = &received[step * n..(step + 1) * n];
            let mut new_metrics = vec![u32::MAX; num_states];
            let mut new_survivors = vec![0usize; num_states];
            let mut new_decisions = vec![false; num_states];

            for state in 0..num_states {
                if metrics[state] == u32::MAX {
                    continue;
                }
                for input in [false, true] {
                    let next = self.trellis.next_state(state, input);
                    let expected = self.trellis.output(state, input);
                    let hamming = expected
                        .iter()
                        .zip(group)
                        .filter(|(e, r)| e != r)
                        .count() as u32;

                    // Strict comparison: the earliest candidate keeps
                    // equal-metric ties.
                    let candidate = metrics[state].saturating_add(hamming);
                    if candidate < new_metrics[next] {
                        new_metrics[next] = candidate;
                        new_survivors[next] = state;
                        new_decisions[next] = input;
                    }
                }
            }

            metrics = new_metrics;
            survivors.push(new_survivors);
            decisions.push(new_decisions);
        }

        // Traceback starts at the minimum-metric terminal state, lowest
        // index winning ties so a cleanly terminated frame starts at the
        // all-zero state.
        let mut best_state = 0;
        let mut best_metric = u32::MAX;
        for (state, &metric) in metrics.iter().enumerate() {
            if metric < best_metric {
                best_metric = metric;
                best_state = state;
            }
        }
        let terminated = best_state == 0;

        let mut path = vec![false; num_steps];
        let mut state = best_state;
        for step in (0..num_steps).rev() {
            path[step] = decisions[step][state];
            state = survivors[step][state];
        }

        // Strip the tail decisions; the caller gets source-length bits.
        path.truncate(num_steps - memory);

        Ok(DecodeOutcome {
            bits: path,
            path_metric: best_metric,
            terminated,
        })
    }
}
