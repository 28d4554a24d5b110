//! Through-zero PWM square wave.

use wavemorph_core::{GeneratorInfo, WaveformGenerator};

// Comparator dead zone; keeps the sign decision stable at the threshold.
const DEAD_ZONE: f64 = 1e-12;

/// Square wave with pulse-width modulation via a comparator.
///
/// The morph scalar maps to a pulse width `pw = 2u − 1 ∈ [-1, 1]` and the
/// output is `sign(sin θ − pw)`, with samples inside the dead zone pinned
/// to zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct SquarePwmTz;

impl WaveformGenerator for SquarePwmTz {
    fn generate(&self, theta: &[f64], u: f64) -> Vec<f64> {
        let pw = (2.0 * u - 1.0).clamp(-1.0, 1.0);
        theta
            .iter()
            .map(|&t| {
                let d = t.sin() - pw;
                if d > DEAD_ZONE {
                    1.0
                } else if d < -DEAD_ZONE {
                    -1.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            name: "Square PWM TZ".into(),
            id: "square_pwm_tz".into(),
            description: "Through-zero PWM square wave via comparator".into(),
            author: "Kristoffer Ekstrand".into(),
            tags: vec!["PWM".into(), "square".into(), "through-zero".into()],
            collections: vec!["PWM".into()],
            keywords: vec!["PWM".into(), "square".into(), "through-zero".into()],
            free: true,
        }
    }
}
