//! Sine to triangle morph.

use std::f64::consts::FRAC_2_PI;

use wavemorph_core::{GeneratorInfo, WaveformGenerator};

/// Morphs from a pure sine (`u = 0`) to a triangle (`u = 1`).
///
/// The triangle is derived from the sine itself via the arcsine transform
/// `(2/π)·asin(sin θ)`, so both components stay phase-locked across the
/// whole sweep.
#[derive(Debug, Default, Clone, Copy)]
pub struct SineToTriangle;

impl WaveformGenerator for SineToTriangle {
    fn generate(&self, theta: &[f64], u: f64) -> Vec<f64> {
        theta
            .iter()
            .map(|&t| {
                let sine = t.sin();
                let tri = FRAC_2_PI * sine.asin();
                (1.0 - u) * sine + u * tri
            })
            .collect()
    }

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            name: "sine_to_triangle".into(),
            id: "sine_to_triangle".into(),
            description: "Sine to triangle morph generator".into(),
            author: "Kristoffer Ekstrand".into(),
            tags: vec!["morph".into(), "sine".into(), "triangle".into()],
            collections: vec!["morphing".into()],
            keywords: vec!["sine".into(), "triangle".into(), "morph".into()],
            free: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;
    use wavemorph_core::phase_array;

    #[test]
    fn test_pure_sine_at_zero() {
        let theta = phase_array(64);
        let row = SineToTriangle.generate(&theta, 0.0);
        for (y, t) in row.iter().zip(theta.iter()) {
            assert_abs_diff_eq!(*y, t.sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pure_triangle_at_one() {
        let theta = phase_array(64);
        let row = SineToTriangle.generate(&theta, 1.0);
        // Triangle hits its peak of 1.0 at θ = π/2.
        let quarter = theta
            .iter()
            .position(|&t| (t - FRAC_PI_2).abs() < 1e-12)
            .unwrap();
        assert_abs_diff_eq!(row[quarter], 1.0, epsilon = 1e-12);
        // Halfway up the rising edge the triangle is linear: θ = π/4 → 0.5.
        assert_abs_diff_eq!(row[quarter / 2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoint_is_blend() {
        let theta = phase_array(32);
        let sine = SineToTriangle.generate(&theta, 0.0);
        let tri = SineToTriangle.generate(&theta, 1.0);
        let mid = SineToTriangle.generate(&theta, 0.5);
        for i in 0..theta.len() {
            assert_abs_diff_eq!(mid[i], 0.5 * sine[i] + 0.5 * tri[i], epsilon = 1e-12);
        }
    }
}
