//! Built-in waveform formulas for wavemorph.
//!
//! One module per formula. Each type is a stateless
//! [`WaveformGenerator`](wavemorph_core::WaveformGenerator): `generate` is
//! a pure function of the phase table and the morph scalar, so the same
//! instance can drive any number of builds.

mod linear_interpolation;
mod sine_to_saw;
mod sine_to_triangle;
mod square_pwm_tz;

pub use linear_interpolation::LinearInterpolation;
pub use sine_to_saw::SineToSaw;
pub use sine_to_triangle::SineToTriangle;
pub use square_pwm_tz::SquarePwmTz;
