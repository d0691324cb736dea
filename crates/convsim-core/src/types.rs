//! Core types for the convolutional coding library
//!
//! Defines the error taxonomy shared by the trellis builder, encoder and
//! decoder, plus a few aliases used throughout the crate. Every structural
//! failure is detected before any partial output is produced: a function
//! returning a `CodingError` has emitted nothing.

/// An ordered sequence of hard bits (source, coded, received or decoded).
pub type BitSequence = Vec<bool>;

/// Result type for coding operations.
pub type CodingResult<T> = Result<T, CodingError>;

/// Errors that can occur while building a trellis or decoding a sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodingError {
    /// The generating matrix is malformed: empty, non-rectangular, or
    /// contains entries other than 0 and 1. Fatal to the configuration,
    /// never retried.
    #[error("invalid generating matrix: {0}")]
    InvalidMatrix(String),

    /// The received sequence length is incompatible with the trellis: not a
    /// multiple of the n code bits per step, or too short to contain the
    /// termination tail. Signals an encoder/channel mismatch on the caller
    /// side; the sequence is never silently truncated or padded.
    #[error(
        "received length {len} incompatible with rate-1/{n} trellis of memory {memory}"
    )]
    LengthMismatch {
        /// Length of the offending received sequence.
        len: usize,
        /// Code bits per trellis step.
        n: usize,
        /// Encoder memory (tail length).
        memory: usize,
    },
}
