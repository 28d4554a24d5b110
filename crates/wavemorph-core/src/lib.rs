//! # wavemorph-core
//!
//! Wavetable build engine: phase table, sample conditioning pipeline,
//! generator contract, and registry.
//!
//! A [`WaveformGenerator`] is a pure formula over a shared phase table and
//! a morph scalar `u`; [`build`] sweeps `u` from 0 to 1 across the
//! requested frames and conditions each cycle (DC removal, normalization,
//! zero-crossing alignment, amplitude clamp) in a fixed order, then applies
//! a whole-table DC/normalize pass. The result is a [`Wavetable`] ready to
//! flatten for PCM export.
//!
//! ```
//! use wavemorph_core::{build, GeneratorInfo, WaveformGenerator};
//!
//! struct Sine;
//!
//! impl WaveformGenerator for Sine {
//!     fn generate(&self, theta: &[f64], _u: f64) -> Vec<f64> {
//!         theta.iter().map(|t| t.sin()).collect()
//!     }
//!     fn info(&self) -> GeneratorInfo {
//!         GeneratorInfo {
//!             name: "sine".into(),
//!             id: "sine".into(),
//!             description: "Plain sine".into(),
//!             author: String::new(),
//!             tags: vec![],
//!             collections: vec![],
//!             keywords: vec![],
//!             free: true,
//!         }
//!     }
//! }
//!
//! let table = build(&Sine, 64, 2048).unwrap();
//! assert_eq!(table.samples().len(), 64 * 2048);
//! ```

pub mod engine;
pub mod error;
pub mod generator;
pub mod phase;
pub mod processing;
pub mod registry;

pub use engine::{build, Wavetable};
pub use error::{Result, WavetableError};
pub use generator::{GeneratorInfo, ProcessingConfig, WaveformGenerator};
pub use phase::phase_array;
pub use registry::GeneratorRegistry;
