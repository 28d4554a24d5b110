//! Phase table construction.

use std::f64::consts::TAU;

/// One cycle of phase angles: `θ_k = 2π·k/N` for `k ∈ [0, N)`.
///
/// Built once per wavetable and shared read-only by every frame of the
/// build. The engine guarantees `frame_size > 0` before calling this.
pub fn phase_array(frame_size: usize) -> Vec<f64> {
    (0..frame_size)
        .map(|k| TAU * k as f64 / frame_size as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_phase_array_length() {
        assert_eq!(phase_array(1).len(), 1);
        assert_eq!(phase_array(2048).len(), 2048);
    }

    #[test]
    fn test_phase_array_values() {
        let theta = phase_array(4);
        assert_abs_diff_eq!(theta[0], 0.0);
        assert_abs_diff_eq!(theta[1], PI / 2.0);
        assert_abs_diff_eq!(theta[2], PI);
        assert_abs_diff_eq!(theta[3], 3.0 * PI / 2.0);
    }

    #[test]
    fn test_phase_array_excludes_tau() {
        // The cycle is half-open: the last angle is strictly below 2π.
        let theta = phase_array(16);
        assert!(*theta.last().unwrap() < TAU);
        assert!(theta.windows(2).all(|w| w[0] < w[1]));
    }
}
