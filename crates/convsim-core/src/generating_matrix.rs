//! Generating Matrix — tap description of a rate-1/n convolutional code
//!
//! The generating matrix `G` has one row per encoder output and `m + 1`
//! columns, one per tap on the encoder register: column 0 selects the
//! current input bit (the direct tap), column `c` the bit shifted in `c`
//! steps ago. Each output bit is the XOR of the register bits whose column
//! holds a 1, so the matrix fully determines the code; the number of rows
//! fixes the rate at 1/n and the column count fixes the memory at `m`.
//!
//! ## Example
//!
//! ```rust
//! use convsim_core::GeneratingMatrix;
//!
//! // Rate-1/2, memory-2 code: outputs x[t]^x[t-2] and x[t]^x[t-1]^x[t-2]
//! let g = GeneratingMatrix::new(vec![vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
//! assert_eq!(g.n_outputs(), 2);
//! assert_eq!(g.memory(), 2);
//! assert!((g.rate() - 0.5).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{CodingError, CodingResult};

/// A validated binary generating matrix for a rate-1/n convolutional code.
///
/// Construction rejects malformed input, so every held matrix is non-empty,
/// rectangular and binary. Rows are output taps in emission order; columns
/// run from the direct tap (column 0) to the oldest register stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct GeneratingMatrix {
    rows: Vec<Vec<u8>>,
}

impl GeneratingMatrix {
    /// Create a generating matrix from row-major tap rows.
    ///
    /// Fails with [`CodingError::InvalidMatrix`] if the matrix is empty,
    /// any row is empty, rows have unequal lengths, or any entry is not
    /// 0 or 1.
    pub fn new(rows: Vec<Vec<u8>>) -> CodingResult<Self> {
        if rows.is_empty() {
            return Err(CodingError::InvalidMatrix("matrix has no rows".into()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(CodingError::InvalidMatrix("rows have no columns".into()));
        }
        if width > 64 {
            return Err(CodingError::InvalidMatrix(format!(
                "{} columns exceed the 64-bit register limit",
                width
            )));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(CodingError::InvalidMatrix(format!(
                    "row {} has {} columns, expected {}",
                    r,
                    row.len(),
                    width
                )));
            }
            for (c, &entry) in row.iter().enumerate() {
                if entry > 1 {
                    return Err(CodingError::InvalidMatrix(format!(
                        "entry ({}, {}) is {}, expected 0 or 1",
                        r, c, entry
                    )));
                }
            }
        }
        Ok(Self { rows })
    }

    /// The classic rate-1/2, memory-2 code with taps (1,0,1) and (1,1,1).
    ///
    /// Free distance 5, correcting up to 2 channel errors between merges.
    /// The standard textbook example for hard-decision Viterbi decoding.
    pub fn rate_half_m2() -> Self {
        Self {
            rows: vec![vec![1, 0, 1], vec![1, 1, 1]],
        }
    }

    /// A rate-1/3, memory-2 code with taps (1,1,1), (1,0,1) and (1,1,0).
    pub fn rate_third_m2() -> Self {
        Self {
            rows: vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 0]],
        }
    }

    /// Number of encoder outputs n (rows of the matrix).
    pub fn n_outputs(&self) -> usize {
        self.rows.len()
    }

    /// Encoder memory m (constraint length minus one).
    pub fn memory(&self) -> usize {
        self.rows[0].len() - 1
    }

    /// Code rate k/n with k fixed at 1.
    pub fn rate(&self) -> f64 {
        1.0 / self.rows.len() as f64
    }

    /// Tap rows in emission order.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<u8>>> for GeneratingMatrix {
    type Error = CodingError;

    fn try_from(rows: Vec<Vec<u8>>) -> CodingResult<Self> {
        Self::new(rows)
    }
}

impl From<GeneratingMatrix> for Vec<Vec<u8>> {
    fn from(g: GeneratingMatrix) -> Self {
        g.rows
    }
}
