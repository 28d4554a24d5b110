//! Error types for wavemorph-core.

use thiserror::Error;

/// Error type for wavetable build operations.
///
/// Every variant is fatal to the build that raised it: generation is a
/// deterministic pure computation, so there is nothing to retry. Batch
/// callers catch per request and move on to the next one.
#[derive(Error, Debug)]
pub enum WavetableError {
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Generator '{0}' is already registered")]
    DuplicateName(String),

    #[error("Invalid metadata: '{field}' must be non-empty")]
    InvalidMetadata { field: &'static str },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Generator returned {actual} samples, expected {expected}")]
    GenerationLengthMismatch { expected: usize, actual: usize },

    #[error("Non-finite sample in output of '{0}'")]
    NonFiniteOutput(String),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, WavetableError>;
