//! Export options.

use crate::error::{ExportError, Result};

/// Sample rates the exporter accepts. The rate is playback metadata only;
/// wavetable content is sample-rate independent.
pub const SUPPORTED_SAMPLE_RATES: [u32; 3] = [44100, 48000, 96000];

/// PCM bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    #[default]
    Int16,
    Int24,
    Int32,
}

impl BitDepth {
    /// Bits per sample.
    pub fn bits(&self) -> u16 {
        match self {
            BitDepth::Int16 => 16,
            BitDepth::Int24 => 24,
            BitDepth::Int32 => 32,
        }
    }

    /// Parse a bit count as given on the command line.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            16 => Ok(BitDepth::Int16),
            24 => Ok(BitDepth::Int24),
            32 => Ok(BitDepth::Int32),
            other => Err(ExportError::UnsupportedBitDepth(other)),
        }
    }
}

/// Check `rate` against the supported set.
pub fn validate_sample_rate(rate: u32) -> Result<u32> {
    if SUPPORTED_SAMPLE_RATES.contains(&rate) {
        Ok(rate)
    } else {
        Err(ExportError::UnsupportedSampleRate(rate))
    }
}
