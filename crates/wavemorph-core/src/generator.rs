//! Generator plugin contract.
//!
//! A waveform formula plugs into the build engine by implementing
//! [`WaveformGenerator`]. Implementations are stateless: `generate` is a
//! pure function of the phase table and the morph scalar.

use crate::error::{Result, WavetableError};

/// Processing flags a generator hands the engine.
///
/// `wt_*` flags control the whole-table pass after the frame loop, `wf_*`
/// flags the per-frame pass. Zero-crossing alignment and the final
/// amplitude clamp are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingConfig {
    /// Normalize the whole table to unit peak after the frame loop.
    pub wt_normalise: bool,
    /// Remove the mean over all samples of the table.
    pub wt_dc_remove: bool,
    /// Normalize each frame to unit peak.
    pub wf_normalise: bool,
    /// Remove each frame's mean.
    pub wf_dc_remove: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            wt_normalise: true,
            wt_dc_remove: true,
            wf_normalise: true,
            wf_dc_remove: true,
        }
    }
}

/// Descriptive metadata for a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Display name.
    pub name: String,
    /// Stable identifier, used for artifact filenames.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Creator; may be empty.
    pub author: String,
    /// Category tags.
    pub tags: Vec<String>,
    /// Collections this generator belongs to.
    pub collections: Vec<String>,
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Whether the generator is freely available.
    pub free: bool,
}

impl GeneratorInfo {
    /// Check the required fields, naming the first offender.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(WavetableError::InvalidMetadata { field: "name" });
        }
        if self.id.is_empty() {
            return Err(WavetableError::InvalidMetadata { field: "id" });
        }
        if self.description.is_empty() {
            return Err(WavetableError::InvalidMetadata { field: "description" });
        }
        Ok(())
    }
}

/// A pluggable waveform formula.
pub trait WaveformGenerator: Send + Sync {
    /// Evaluate one cycle of the waveform at morph position `u`.
    ///
    /// Must return a buffer of the same length as `theta`. The engine does
    /// not clamp `u`; formulas decide their own behavior outside `[0, 1]`.
    /// Output is expected to be finite-valued, though the engine does not
    /// enforce this.
    fn generate(&self, theta: &[f64], u: f64) -> Vec<f64>;

    /// Processing flags for the build pipeline.
    fn processing(&self) -> ProcessingConfig {
        ProcessingConfig::default()
    }

    /// Descriptive metadata.
    fn info(&self) -> GeneratorInfo;
}
