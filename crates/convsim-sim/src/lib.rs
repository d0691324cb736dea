//! # Convolutional-code BER sweep simulation
//!
//! Monte-Carlo glue around [`convsim_core`]: an explicit configuration
//! object describes the sweep (frames, frame length, generating matrix,
//! Eb/N0 grid, master seed), the driver runs every independent frame
//! pipeline in parallel, and an explicit results object carries the
//! per-frame BER tables back to the caller. No state survives a run.
//!
//! ## Example
//!
//! ```rust
//! use convsim_sim::{driver, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     n_frames: 4,
//!     bits_per_frame: 200,
//!     ebn0_dbs: vec![0.0, 4.0, 8.0],
//!     ..Default::default()
//! };
//! let results = driver::run(&config).unwrap();
//! assert_eq!(results.average_coded().len(), 3);
//! ```

pub mod config;
pub mod driver;

pub use config::SimulationConfig;
pub use driver::{run, SimulationResults};
