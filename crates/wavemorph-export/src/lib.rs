//! # wavemorph-export
//!
//! WAV/PCM serialization for built wavetables.
//!
//! The build engine hands over a flat `f32` buffer plus its shape; this
//! crate chooses the PCM subtype for the requested bit depth, names the
//! artifact deterministically from the generator id and parameters, and
//! writes a mono WAV file via `hound`.

pub mod error;
mod options;
pub mod wav;

pub use error::{ExportError, Result};
pub use options::{validate_sample_rate, BitDepth, SUPPORTED_SAMPLE_RATES};
pub use wav::{encode_wavetable_memory, export_wavetable, wav_filename};
