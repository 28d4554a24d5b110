//! WAV format encoder using hound
//!
//! Wavetables are written as mono integer PCM at 16, 24, or 32 bits.

use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::Result;
use crate::options::{validate_sample_rate, BitDepth};

/// Deterministic artifact name: `{id}_{frames}frames_{rate}Hz_{bits}bit.wav`.
///
/// The parameters are embedded so a directory of wavetables stays
/// self-describing.
pub fn wav_filename(id: &str, frames: usize, sample_rate: u32, bit_depth: BitDepth) -> String {
    format!(
        "{id}_{frames}frames_{sample_rate}Hz_{}bit.wav",
        bit_depth.bits()
    )
}

/// Write a flattened wavetable to a mono WAV file under `output_dir`.
///
/// Creates the directory if needed and returns the path of the written
/// file. Samples are expected in `[-1, 1]`; out-of-range values are
/// clipped during integer conversion.
pub fn export_wavetable(
    id: &str,
    samples: &[f32],
    frames: usize,
    output_dir: &Path,
    sample_rate: u32,
    bit_depth: BitDepth,
) -> Result<PathBuf> {
    let sample_rate = validate_sample_rate(sample_rate)?;
    std::fs::create_dir_all(output_dir)?;

    let path = output_dir.join(wav_filename(id, frames, sample_rate, bit_depth));
    let mut writer = WavWriter::create(&path, wav_spec(sample_rate, bit_depth))?;
    write_mono_samples(&mut writer, samples, bit_depth)?;
    writer.finalize()?;

    log::info!("Saved {}", path.display());
    Ok(path)
}

/// Encode a flattened wavetable to WAV bytes in memory.
pub fn encode_wavetable_memory(
    samples: &[f32],
    sample_rate: u32,
    bit_depth: BitDepth,
) -> Result<Vec<u8>> {
    let sample_rate = validate_sample_rate(sample_rate)?;

    let mut buffer = Vec::new();
    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let mut writer = WavWriter::new(cursor, wav_spec(sample_rate, bit_depth))?;
        write_mono_samples(&mut writer, samples, bit_depth)?;
        writer.finalize()?;
    }
    Ok(buffer)
}

fn wav_spec(sample_rate: u32, bit_depth: BitDepth) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: bit_depth.bits(),
        sample_format: SampleFormat::Int,
    }
}

fn write_mono_samples<W: Write + Seek>(
    writer: &mut WavWriter<W>,
    samples: &[f32],
    bit_depth: BitDepth,
) -> Result<()> {
    match bit_depth {
        BitDepth::Int16 => {
            for &sample in samples {
                writer.write_sample(float_to_i16(sample))?;
            }
        }
        BitDepth::Int24 => {
            for &sample in samples {
                writer.write_sample(float_to_i24(sample))?;
            }
        }
        BitDepth::Int32 => {
            for &sample in samples {
                writer.write_sample(float_to_i32(sample))?;
            }
        }
    }
    Ok(())
}

/// Convert float sample to 16-bit integer with clipping
#[inline]
fn float_to_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * 32767.0) as i16
}

/// Convert float sample to 24-bit integer (stored as i32) with clipping
#[inline]
fn float_to_i24(sample: f32) -> i32 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * 8388607.0) as i32
}

/// Convert float sample to 32-bit integer with clipping
#[inline]
fn float_to_i32(sample: f32) -> i32 {
    let clamped = sample.clamp(-1.0, 1.0) as f64;
    (clamped * 2147483647.0) as i32
}
