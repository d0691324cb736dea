//! Sweep driver — frame × Eb/N0 Monte-Carlo orchestration
//!
//! Runs the full coded-vs-uncoded comparison: the trellis is built once
//! and shared read-only, then every frame runs its own independent
//! encode → channel → decode → compare pipeline on a worker thread. Each
//! worker returns its own BER rows and the results are combined after the
//! join, so there are no shared writes anywhere in the sweep.
//!
//! Per-frame seeds derive deterministically from the master seed, making a
//! whole run reproducible regardless of how frames are scheduled.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use convsim_core::{
    pe_coded, pe_uncoded, BerCurve, BerTester, BinarySymmetricChannel,
    CodingResult, ConvolutionalEncoder, RandomSource, Trellis, ViterbiDecoder,
};

use crate::config::SimulationConfig;

/// Per-frame BER matrices and their frame averages for one sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResults {
    /// Eb/N0 points in dB, in sweep order.
    pub ebn0_dbs: Vec<f64>,
    /// Coded BER indexed `[ebn0][frame]`.
    pub coded: Vec<Vec<f64>>,
    /// Uncoded BER indexed `[ebn0][frame]`.
    pub uncoded: Vec<Vec<f64>>,
}

impl SimulationResults {
    /// Coded BER averaged over frames, one value per Eb/N0 point.
    pub fn average_coded(&self) -> Vec<f64> {
        self.coded.iter().map(|frames| mean(frames)).collect()
    }

    /// Uncoded BER averaged over frames, one value per Eb/N0 point.
    pub fn average_uncoded(&self) -> Vec<f64> {
        self.uncoded.iter().map(|frames| mean(frames)).collect()
    }

    /// Collapse into a [`BerCurve`] of frame averages.
    pub fn to_curve(&self) -> BerCurve {
        let coded = self.average_coded();
        let uncoded = self.average_uncoded();
        let mut curve = BerCurve::new();
        for (i, &db) in self.ebn0_dbs.iter().enumerate() {
            curve.add_point(db, coded[i], uncoded[i]);
        }
        curve
    }

    /// CSV export of the frame-averaged curve.
    pub fn to_csv(&self) -> String {
        self.to_curve().to_csv()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// BER rows produced by one frame, one entry per Eb/N0 point.
struct FrameOutcome {
    coded: Vec<f64>,
    uncoded: Vec<f64>,
}

/// Run the full sweep described by `config`.
///
/// Frames run in parallel; each derives its source bits, channel noise and
/// decode from seeds mixed out of the master seed, so results are
/// reproducible for a given configuration.
pub fn run(config: &SimulationConfig) -> CodingResult<SimulationResults> {
    let trellis = Arc::new(Trellis::new(&config.generator));
    let rate = config.generator.rate();
    let ebn0s = config.ebn0_linear();

    let frames: Vec<FrameOutcome> = (0..config.n_frames)
        .into_par_iter()
        .map(|frame| frame_pipeline(config, &trellis, rate, &ebn0s, frame))
        .collect::<CodingResult<Vec<_>>>()?;

    // Reduction: transpose the per-frame rows into [ebn0][frame] tables
    let n_points = ebn0s.len();
    let mut coded = vec![Vec::with_capacity(frames.len()); n_points];
    let mut uncoded = vec![Vec::with_capacity(frames.len()); n_points];
    for frame in &frames {
        for i in 0..n_points {
            coded[i].push(frame.coded[i]);
            uncoded[i].push(frame.uncoded[i]);
        }
    }

    Ok(SimulationResults {
        ebn0_dbs: config.ebn0_dbs.clone(),
        coded,
        uncoded,
    })
}

/// One frame's encode → channel → decode → compare pipeline across every
/// Eb/N0 point. The frame is encoded once; only the channel draws differ
/// between points.
fn frame_pipeline(
    config: &SimulationConfig,
    trellis: &Arc<Trellis>,
    rate: f64,
    ebn0s: &[f64],
    frame: usize,
) -> CodingResult<FrameOutcome> {
    let frame_seed = mix_seed(config.seed, frame as u64);
    let bits = RandomSource::new(frame_seed).generate_bits(config.bits_per_frame);

    let mut encoder = ConvolutionalEncoder::new(trellis.clone());
    let coded_bits = encoder.encode_terminated(&bits);
    let decoder = ViterbiDecoder::new(trellis.clone());

    let mut coded = Vec::with_capacity(ebn0s.len());
    let mut uncoded = Vec::with_capacity(ebn0s.len());

    for (point, &ebn0) in ebn0s.iter().enumerate() {
        // With coding: halved energy per transmitted bit at rate 1/2
        let mut channel = BinarySymmetricChannel::new(
            pe_coded(ebn0, rate),
            mix_seed(frame_seed, 2 * point as u64),
        );
        let received = channel.transmit(&coded_bits);
        let outcome = decoder.decode(&received)?;
        let mut tester = BerTester::new();
        tester.update(&bits, &outcome.bits);
        coded.push(tester.ber());

        // Without coding: the source frame is transmitted as is
        let mut channel = BinarySymmetricChannel::new(
            pe_uncoded(ebn0),
            mix_seed(frame_seed, 2 * point as u64 + 1),
        );
        let received = channel.transmit(&bits);
        let mut tester = BerTester::new();
        tester.update(&bits, &received);
        uncoded.push(tester.ber());
    }

    Ok(FrameOutcome { coded, uncoded })
}

/// SplitMix64 finalizer over `seed ^ stream`, decorrelating derived seeds.
fn mix_seed(seed: u64, stream: u64) -> u64 {
    let mut z = seed ^ stream.wrapping_mul(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
