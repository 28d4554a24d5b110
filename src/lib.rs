//! # wavemorph — morphing wavetable generator
//!
//! Umbrella crate coordinating the wavetable subsystems:
//! - **wavemorph-core** — build engine (phase table, conditioning
//!   pipeline, generator contract, registry)
//! - **wavemorph-waveforms** — built-in waveform formulas
//! - **wavemorph-export** — WAV/PCM serialization
//!
//! ## Quick start
//!
//! ```no_run
//! use wavemorph::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = wavemorph::builtins::builtin_registry()?;
//! let generator = registry.lookup("sine_to_triangle")?;
//!
//! let table = build(generator.as_ref(), 256, 2048)?;
//! export_wavetable(
//!     "sine_to_triangle",
//!     &table.into_f32(),
//!     256,
//!     std::path::Path::new("wavetable_dist"),
//!     44100,
//!     BitDepth::Int16,
//! )?;
//! # Ok(())
//! # }
//! ```

/// Re-export of wavemorph-core for direct access
pub use wavemorph_core as core;
/// Re-export of wavemorph-export for direct access
pub use wavemorph_export as export;
/// Re-export of wavemorph-waveforms for direct access
pub use wavemorph_waveforms as waveforms;

pub mod builtins;

pub use wavemorph_core::{
    build, phase_array, GeneratorInfo, GeneratorRegistry, ProcessingConfig, Wavetable,
    WaveformGenerator, WavetableError,
};
pub use wavemorph_export::{export_wavetable, BitDepth, ExportError, SUPPORTED_SAMPLE_RATES};

/// Common imports for wavetable generation.
pub mod prelude {
    pub use crate::builtins::builtin_registry;
    pub use wavemorph_core::{
        build, GeneratorInfo, GeneratorRegistry, ProcessingConfig, Wavetable, WaveformGenerator,
        WavetableError,
    };
    pub use wavemorph_export::{export_wavetable, BitDepth};
}
