//! Simulation configuration
//!
//! All parameters of a BER sweep live in one explicit, serializable
//! configuration object passed into the driver; nothing is kept in
//! process-wide state between runs.

use convsim_core::GeneratingMatrix;
use serde::{Deserialize, Serialize};

/// Configuration for a coded-vs-uncoded BER sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of simulated frames (realizations of the transmission).
    pub n_frames: usize,
    /// Source bits per frame.
    pub bits_per_frame: usize,
    /// Generating matrix of the convolutional code.
    pub generator: GeneratingMatrix,
    /// Eb/N0 operating points to test, in dB.
    pub ebn0_dbs: Vec<f64>,
    /// Master seed; per-frame and per-channel seeds derive from it.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_frames: 100,
            bits_per_frame: 10_000,
            generator: GeneratingMatrix::rate_half_m2(),
            ebn0_dbs: (0..12).map(f64::from).collect(),
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Eb/N0 points converted from dB to natural units.
    pub fn ebn0_linear(&self) -> Vec<f64> {
        self.ebn0_dbs.iter().map(|db| 10f64.powf(db / 10.0)).collect()
    }

    /// Total source bits across the whole sweep.
    pub fn total_source_bits(&self) -> u64 {
        self.n_frames as u64 * self.bits_per_frame as u64
    }
}
