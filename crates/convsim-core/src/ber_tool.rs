//! BER Tool — bit-error-rate accounting and Eb/N0 conversions
//!
//! Accumulates mismatches between transmitted and received bit sequences,
//! converts Eb/N0 operating points into BSC crossover probabilities via the
//! Gaussian tail function, and collects the `(Eb/N0, BER)` pairs of a sweep
//! into an exportable curve.
//!
//! ## Example
//!
//! ```rust
//! use convsim_core::BerTester;
//!
//! let mut ber = BerTester::new();
//! let tx = vec![true, false, true, true, false, true, false, false, true, true];
//! let rx = vec![true, false, true, false, false, true, false, true, true, true];
//! ber.update(&tx, &rx);
//! assert_eq!(ber.error_bits(), 2);
//! assert!((ber.ber() - 0.2).abs() < 1e-10);
//! ```

/// Complementary error function approximation.
///
/// Abramowitz & Stegun 7.1.26, absolute error below 1.5e-7.
pub fn erfc(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.3275911 * x.abs());
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    let result = poly * (-x * x).exp();
    if x >= 0.0 {
        result
    } else {
        2.0 - result
    }
}

/// Gaussian tail function `Q(x) = 0.5 * erfc(x / sqrt(2))`.
pub fn q_function(x: f64) -> f64 {
    0.5 * erfc(x / std::f64::consts::SQRT_2)
}

/// BSC crossover probability for coded transmission at a linear Eb/N0:
/// `Pe = Q(sqrt(2 * rate * Eb/N0))`.
pub fn pe_coded(ebn0: f64, rate: f64) -> f64 {
    q_function((2.0 * rate * ebn0).sqrt())
}

/// BSC crossover probability for uncoded transmission at a linear Eb/N0:
/// `Pe = Q(sqrt(2 * Eb/N0))`.
pub fn pe_uncoded(ebn0: f64) -> f64 {
    q_function((2.0 * ebn0).sqrt())
}

/// Bit Error Rate accumulator.
#[derive(Debug, Clone, Default)]
pub struct BerTester {
    total_bits: u64,
    error_bits: u64,
}

impl BerTester {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update with transmitted and received bit sequences, comparing up to
    /// the shorter length.
    pub fn update(&mut self, tx_bits: &[bool], rx_bits: &[bool]) {
        let len = tx_bits.len().min(rx_bits.len());
        self.error_bits += tx_bits[..len]
            .iter()
            .zip(&rx_bits[..len])
            .filter(|(t, r)| t != r)
            .count() as u64;
        self.total_bits += len as u64;
    }

    /// Overall BER, or 0 before any bits were seen.
    pub fn ber(&self) -> f64 {
        if self.total_bits == 0 {
            return 0.0;
        }
        self.error_bits as f64 / self.total_bits as f64
    }

    /// Total bits compared.
    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    /// Total mismatched bits.
    pub fn error_bits(&self) -> u64 {
        self.error_bits
    }

    /// Reset the counters.
    pub fn reset(&mut self) {
        self.total_bits = 0;
        self.error_bits = 0;
    }

    /// One-line report.
    pub fn summary(&self) -> String {
        format!(
            "BER: {:.6} ({} errors / {} bits)",
            self.ber(),
            self.error_bits,
            self.total_bits
        )
    }
}

/// One point of a coded-vs-uncoded BER sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BerPoint {
    /// Eb/N0 in dB.
    pub ebn0_db: f64,
    /// Frame-averaged BER with convolutional coding.
    pub ber_coded: f64,
    /// Frame-averaged BER without coding.
    pub ber_uncoded: f64,
}

/// BER-vs-Eb/N0 curve collected over a sweep.
#[derive(Debug, Clone, Default)]
pub struct BerCurve {
    points: Vec<BerPoint>,
}

impl BerCurve {
    /// Create an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a measurement point.
    pub fn add_point(&mut self, ebn0_db: f64, ber_coded: f64, ber_uncoded: f64) {
        self.points.push(BerPoint {
            ebn0_db,
            ber_coded,
            ber_uncoded,
        });
    }

    /// All points in insertion order.
    pub fn points(&self) -> &[BerPoint] {
        &self.points
    }

    /// Export as CSV with an `ebn0_db,ber_coded,ber_uncoded` header.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("ebn0_db,ber_coded,ber_uncoded\n");
        for p in &self.points {
            csv.push_str(&format!(
                "{:.2},{:.10},{:.10}\n",
                p.ebn0_db, p.ber_coded, p.ber_uncoded
            ));
        }
        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erfc_reference_values() {
        assert!((erfc(0.0) - 1.0).abs() < 1e-6);
        assert!(erfc(5.0) < 1e-10);
        assert!((erfc(-5.0) - 2.0).abs() < 1e-10);
        // erfc(1) = 0.157299...
        assert!((erfc(1.0) - 0.157299).abs() < 1e-5);
    }

    #[test]
    fn test_q_function() {
        assert!((q_function(0.0) - 0.5).abs() < 1e-9);
        // Q(1) = 0.158655...
        assert!((q_function(1.0) - 0.158655).abs() < 1e-5);
        assert!(q_function(6.0) < 1e-8);
    }

    #[test]
    fn test_pe_decreases_with_ebn0() {
        let mut last_coded = 1.0;
        let mut last_uncoded = 1.0;
        for db in 0..12 {
            let ebn0 = 10f64.powf(db as f64 / 10.0);
            let coded = pe_coded(ebn0, 0.5);
            let uncoded = pe_uncoded(ebn0);
            assert!(coded < last_coded);
            assert!(uncoded < last_uncoded);
            // Halved energy per code bit: the raw coded channel is noisier
            assert!(coded > uncoded);
            last_coded = coded;
            last_uncoded = uncoded;
        }
    }

    #[test]
    fn test_zero_errors() {
        let mut ber = BerTester::new();
        let bits = vec![true, false, true, false, true];
        ber.update(&bits, &bits);
        assert_eq!(ber.ber(), 0.0);
        assert_eq!(ber.error_bits(), 0);
        assert_eq!(ber.total_bits(), 5);
    }

    #[test]
    fn test_all_errors() {
        let mut ber = BerTester::new();
        ber.update(&[true; 4], &[false; 4]);
        assert_eq!(ber.ber(), 1.0);
        assert_eq!(ber.error_bits(), 4);
    }

    #[test]
    fn test_incremental_updates() {
        let mut ber = BerTester::new();
        ber.update(&[true; 50], &[false; 50]);
        ber.update(&[true; 50], &[true; 50]);
        assert_eq!(ber.total_bits(), 100);
        assert_eq!(ber.error_bits(), 50);
        assert!((ber.ber() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_is_zero() {
        let ber = BerTester::new();
        assert_eq!(ber.ber(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut ber = BerTester::new();
        ber.update(&[true; 10], &[false; 10]);
        ber.reset();
        assert_eq!(ber.total_bits(), 0);
        assert_eq!(ber.error_bits(), 0);
    }

    #[test]
    fn test_summary() {
        let mut ber = BerTester::new();
        ber.update(&[true; 10], &[false; 10]);
        let s = ber.summary();
        assert!(s.contains("BER:"));
        assert!(s.contains("10 errors"));
    }

    #[test]
    fn test_curve_csv() {
        let mut curve = BerCurve::new();
        curve.add_point(0.0, 0.1, 0.08);
        curve.add_point(5.0, 0.001, 0.006);
        let csv = curve.to_csv();
        assert!(csv.starts_with("ebn0_db,ber_coded,ber_uncoded\n"));
        assert!(csv.contains("0.00"));
        assert!(csv.contains("5.00"));
        assert_eq!(curve.points().len(), 2);
    }
}
