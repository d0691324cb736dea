//! BER sweep runner
//!
//! Runs the coded-vs-uncoded BER comparison and writes the frame-averaged
//! curve to `ber.csv`. Takes an optional path to a JSON
//! [`SimulationConfig`]; without one the reference parameters are used
//! (100 frames of 10 000 bits, G = [[1,0,1],[1,1,1]], Eb/N0 = 0..12 dB).

use std::env;
use std::error::Error;
use std::fs;
use std::process;

use convsim_sim::{driver, SimulationConfig};

const OUTPUT_PATH: &str = "ber.csv";

fn main() {
    if let Err(e) = run() {
        eprintln!("ber_sweep: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
        None => SimulationConfig::default(),
    };

    println!(
        "sweeping {} frames x {} bits, rate-1/{} code, memory {}",
        config.n_frames,
        config.bits_per_frame,
        config.generator.n_outputs(),
        config.generator.memory()
    );

    let results = driver::run(&config)?;

    println!("{:>8}  {:>12}  {:>12}", "Eb/N0 dB", "BER coded", "BER uncoded");
    for point in results.to_curve().points() {
        println!(
            "{:>8.2}  {:>12.3e}  {:>12.3e}",
            point.ebn0_db, point.ber_coded, point.ber_uncoded
        );
    }

    fs::write(OUTPUT_PATH, results.to_csv())?;
    println!("wrote {}", OUTPUT_PATH);
    Ok(())
}
