//! Linear sine/square crossfade.

use wavemorph_core::{GeneratorInfo, WaveformGenerator};

/// Crossfades from a sine (`u = 0`) to a square (`u = 1`).
///
/// The square is the sign of the sine, so the crossfade is a straight
/// linear interpolation between the two at every sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearInterpolation;

impl WaveformGenerator for LinearInterpolation {
    fn generate(&self, theta: &[f64], u: f64) -> Vec<f64> {
        theta
            .iter()
            .map(|&t| {
                let sine = t.sin();
                let square = if sine > 0.0 {
                    1.0
                } else if sine < 0.0 {
                    -1.0
                } else {
                    0.0
                };
                (1.0 - u) * sine + u * square
            })
            .collect()
    }

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            name: "linear_interpolation".into(),
            id: "linear_interpolation".into(),
            description: "Linear interpolation between sine and square".into(),
            author: "Wavemorph Project".into(),
            tags: vec![
                "morph".into(),
                "sine".into(),
                "square".into(),
                "linear".into(),
                "interpolation".into(),
            ],
            collections: vec!["educational".into(), "morphing".into()],
            keywords: vec!["linear".into(), "interpolation".into(), "morph".into()],
            free: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use wavemorph_core::phase_array;

    #[test]
    fn test_endpoints() {
        let theta = phase_array(64);
        let sine = LinearInterpolation.generate(&theta, 0.0);
        for (y, t) in sine.iter().zip(theta.iter()) {
            assert_abs_diff_eq!(*y, t.sin(), epsilon = 1e-12);
        }

        let square = LinearInterpolation.generate(&theta, 1.0);
        assert!(square
            .iter()
            .all(|&s| s == 1.0 || s == -1.0 || s == 0.0));
    }

    #[test]
    fn test_blend_is_linear_in_u() {
        let theta = phase_array(32);
        let a = LinearInterpolation.generate(&theta, 0.0);
        let b = LinearInterpolation.generate(&theta, 1.0);
        let mid = LinearInterpolation.generate(&theta, 0.25);
        for i in 0..theta.len() {
            assert_abs_diff_eq!(mid[i], 0.75 * a[i] + 0.25 * b[i], epsilon = 1e-12);
        }
    }
}
