//! Sample-buffer conditioning stages.
//!
//! Each stage is a pure in-place transform that leaves the buffer length
//! unchanged. The engine applies them in a fixed order; see [`crate::engine`].

/// Peaks at or below this are treated as silence when scaling.
pub const EPSILON: f64 = 1e-12;

/// Default edge fade length in samples.
pub const FADE_SAMPLES: usize = 4;

/// Subtract the arithmetic mean so the buffer is centered around zero.
pub fn remove_dc(samples: &mut [f64]) {
    if samples.is_empty() {
        return;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    for s in samples.iter_mut() {
        *s -= mean;
    }
}

/// Scale the buffer so its peak absolute value equals `target_peak`.
///
/// Near-silent buffers (peak ≤ [`EPSILON`]) are left untouched so that
/// noise is never amplified into the audible range.
pub fn normalize(samples: &mut [f64], target_peak: f64) {
    let peak = samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
    if peak > EPSILON {
        let scale = target_peak / peak;
        for s in samples.iter_mut() {
            *s *= scale;
        }
    }
}

/// Rotate the buffer so playback starts at the first upward zero crossing.
///
/// Scans for the first `i ≥ 1` with `x[i-1] ≤ 0 < x[i]` and rotates left by
/// `i`. If no upward crossing exists, rotates so the sample with the
/// smallest absolute value comes first. The result is a pure permutation of
/// the input.
pub fn align_to_zero_crossing(samples: &mut [f64]) {
    if samples.is_empty() {
        return;
    }
    let rotation = (1..samples.len())
        .find(|&i| samples[i - 1] <= 0.0 && samples[i] > 0.0)
        .unwrap_or_else(|| min_abs_index(samples));
    if rotation > 0 {
        samples.rotate_left(rotation);
    }
}

fn min_abs_index(samples: &[f64]) -> usize {
    let mut idx = 0;
    let mut best = f64::INFINITY;
    for (i, s) in samples.iter().enumerate() {
        if s.abs() < best {
            best = s.abs();
            idx = i;
        }
    }
    idx
}

/// Linear fade-in over the first `fade_samples` and fade-out over the last.
///
/// No-op when the buffer is too short for both ramps to fit without
/// overlapping.
pub fn fade_edges(samples: &mut [f64], fade_samples: usize) {
    let n = samples.len();
    if fade_samples == 0 || n <= 2 * fade_samples {
        return;
    }
    let denom = fade_samples.saturating_sub(1).max(1) as f64;
    for i in 0..fade_samples {
        let gain = i as f64 / denom;
        samples[i] *= gain;
        samples[n - 1 - i] *= gain;
    }
}

/// Hard-limit every sample to `[-1, 1]`.
pub fn clamp(samples: &mut [f64]) {
    for s in samples.iter_mut() {
        *s = s.clamp(-1.0, 1.0);
    }
}
