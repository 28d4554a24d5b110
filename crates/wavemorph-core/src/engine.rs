//! Wavetable build engine.
//!
//! Drives the per-frame generation loop and applies the conditioning
//! pipeline in a fixed order. Floating-point stage order matters: per frame
//! it is DC removal → normalize → zero-crossing alignment → clamp, then DC
//! removal → normalize once more over the whole table, so the final buffer
//! is guaranteed to sit inside `[-1, 1]` and start phase-aligned.

use crate::error::{Result, WavetableError};
use crate::generator::WaveformGenerator;
use crate::phase::phase_array;
use crate::processing;

/// A built wavetable: `frames` rows of `frame_size` samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavetable {
    frames: usize,
    frame_size: usize,
    samples: Vec<f64>,
}

impl Wavetable {
    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Samples per frame.
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// The flat row-major sample buffer.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// One frame's samples.
    ///
    /// # Panics
    /// Panics if `idx >= frames`.
    pub fn frame(&self, idx: usize) -> &[f64] {
        let start = idx * self.frame_size;
        &self.samples[start..start + self.frame_size]
    }

    /// Whether every sample is finite.
    ///
    /// The engine does not reject non-finite generator output itself; the
    /// export boundary calls this and raises
    /// [`WavetableError::NonFiniteOutput`].
    pub fn is_finite(&self) -> bool {
        self.samples.iter().all(|s| s.is_finite())
    }

    /// Flatten to the export sample precision, consuming the table.
    ///
    /// Frame order is preserved: row `i` of the table occupies samples
    /// `[i * frame_size, (i + 1) * frame_size)` of the output.
    pub fn into_f32(self) -> Vec<f32> {
        self.samples.into_iter().map(|s| s as f32).collect()
    }
}

/// Build a wavetable by sweeping `generator` across the morph range.
///
/// The morph scalar for frame `i` is `i / (frames - 1)`, or `0.0` for a
/// single-frame table. Fails with [`WavetableError::InvalidConfig`] on
/// non-positive dimensions and [`WavetableError::GenerationLengthMismatch`]
/// if the generator returns a wrong-length buffer; a failed build discards
/// all partial output.
pub fn build(
    generator: &dyn WaveformGenerator,
    frames: usize,
    frame_size: usize,
) -> Result<Wavetable> {
    if frames == 0 {
        return Err(WavetableError::InvalidConfig(
            "frames must be positive".into(),
        ));
    }
    if frame_size == 0 {
        return Err(WavetableError::InvalidConfig(
            "frame_size must be positive".into(),
        ));
    }

    let theta = phase_array(frame_size);
    let config = generator.processing();

    log::debug!("Building wavetable: {frames} frames x {frame_size} samples");

    let mut samples = Vec::with_capacity(frames * frame_size);
    for frame_idx in 0..frames {
        let u = if frames > 1 {
            frame_idx as f64 / (frames - 1) as f64
        } else {
            0.0
        };

        let mut row = generator.generate(&theta, u);
        if row.len() != frame_size {
            return Err(WavetableError::GenerationLengthMismatch {
                expected: frame_size,
                actual: row.len(),
            });
        }

        if config.wf_dc_remove {
            processing::remove_dc(&mut row);
        }
        if config.wf_normalise {
            processing::normalize(&mut row, 1.0);
        }
        processing::align_to_zero_crossing(&mut row);
        // Safety net regardless of the configured flags.
        processing::clamp(&mut row);

        samples.extend_from_slice(&row);
    }

    // Whole-table pass over the flat buffer: the mean and peak are taken
    // across all frames so every frame shares one DC reference and scale.
    if config.wt_dc_remove {
        processing::remove_dc(&mut samples);
    }
    if config.wt_normalise {
        processing::normalize(&mut samples, 1.0);
        // Rescaling can overshoot the peak by one ulp.
        processing::clamp(&mut samples);
    }

    Ok(Wavetable {
        frames,
        frame_size,
        samples,
    })
}
