//! Error types for wavemorph-export.

use std::io;
use thiserror::Error;

/// Export error type.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Sample rate outside the supported set
    #[error("Unsupported sample rate: {0} Hz (supported: 44100, 48000, 96000)")]
    UnsupportedSampleRate(u32),

    /// Bit depth outside the supported set
    #[error("Unsupported bit depth: {0} (supported: 16, 24, 32)")]
    UnsupportedBitDepth(u32),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

// Convert hound's error at the API boundary; callers only ever see I/O.
impl From<hound::Error> for ExportError {
    fn from(e: hound::Error) -> Self {
        ExportError::Io(io::Error::other(e))
    }
}
