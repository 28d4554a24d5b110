//! Sine to sawtooth morph.

use std::f64::consts::PI;

use wavemorph_core::{GeneratorInfo, WaveformGenerator};

/// Morphs from a pure sine (`u = 0`) to a rising sawtooth (`u = 1`).
///
/// The saw is the linear ramp `θ/π − 1` over one cycle. The mix is
/// re-normalized to unit peak inside the formula so intermediate morph
/// positions keep full amplitude before the engine pipeline runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SineToSaw;

impl WaveformGenerator for SineToSaw {
    fn generate(&self, theta: &[f64], u: f64) -> Vec<f64> {
        let mut row: Vec<f64> = theta
            .iter()
            .map(|&t| (1.0 - u) * t.sin() + u * (t / PI - 1.0))
            .collect();

        let peak = row.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
        if peak > 0.0 {
            for s in row.iter_mut() {
                *s /= peak;
            }
        }
        row
    }

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            name: "sine_to_saw".into(),
            id: "sine_to_saw".into(),
            description: "Sine to sawtooth morphing generator".into(),
            author: "Wavemorph Project".into(),
            tags: vec!["morph".into(), "sine".into(), "sawtooth".into()],
            collections: vec!["examples".into()],
            keywords: vec![
                "morphing".into(),
                "sine".into(),
                "sawtooth".into(),
                "interpolation".into(),
            ],
            free: true,
        }
    }
}
