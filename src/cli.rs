//! Command-line interface.
//!
//! Each request resolves a generator through the registry, runs the build
//! engine at the fixed frame size, and hands the flattened buffer to the
//! exporter. Failures are reported per request; batch runs keep going past
//! individual errors.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use wavemorph::builtins::builtin_registry;
use wavemorph::{build, phase_array, GeneratorRegistry, WaveformGenerator, WavetableError};
use wavemorph_export::{export_wavetable, validate_sample_rate, BitDepth};

/// Samples per frame for every generated wavetable.
pub const FRAME_SIZE: usize = 2048;

/// Phase table length used by `--validate`.
const VALIDATION_FRAME_SIZE: usize = 128;

/// Morph positions exercised by `--validate`.
const MORPH_GRID: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

// Configuration grid for --batch.
const BATCH_FRAME_COUNTS: [usize; 4] = [64, 128, 256, 512];
const BATCH_SAMPLE_RATES: [u32; 2] = [44100, 48000];
const BATCH_BIT_DEPTHS: [u32; 2] = [16, 24];

#[derive(Parser, Debug)]
#[command(
    name = "wavemorph",
    version,
    about = "Generate morphing wavetables for synthesizers",
    after_help = "Examples:\n  \
        wavemorph sine_to_triangle     Generate the sine-to-triangle morph\n  \
        wavemorph --list               Show available generators\n  \
        wavemorph --validate           Validate all registered generators\n  \
        wavemorph --batch              Generate every generator in every batch configuration"
)]
pub struct Cli {
    /// Generator name (see --list)
    pub waveform: Option<String>,

    /// List available generators
    #[arg(short, long)]
    pub list: bool,

    /// Validate all registered generators
    #[arg(short, long)]
    pub validate: bool,

    /// Generate all wavetables with all batch configurations
    #[arg(long)]
    pub batch: bool,

    /// Number of frames
    #[arg(short, long, default_value_t = 256)]
    pub frames: usize,

    /// Sample rate in Hz
    #[arg(short, long, default_value_t = 44100)]
    pub rate: u32,

    /// PCM bit depth
    #[arg(short, long, default_value_t = 16)]
    pub bits: u32,

    /// Output directory
    #[arg(short, long, default_value = "wavetable_dist")]
    pub output: PathBuf,
}

/// Dispatch a parsed command line; returns the process exit code.
pub fn run(cli: &Cli) -> i32 {
    let registry = match builtin_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if cli.list {
        list_generators(&registry);
        0
    } else if cli.validate {
        if validate_generators(&registry) {
            0
        } else {
            1
        }
    } else if cli.batch {
        batch_generate(&registry, &cli.output)
    } else if let Some(name) = cli.waveform.as_deref() {
        generate_one(&registry, name, cli.frames, cli.rate, cli.bits, &cli.output)
    } else {
        let _ = Cli::command().print_help();
        0
    }
}

fn list_generators(registry: &GeneratorRegistry) {
    println!("Available wavetable generators:");
    for name in registry.names() {
        if let Ok(generator) = registry.lookup(&name) {
            println!("  {name:<22} {}", generator.info().description);
        }
    }
    println!("\nTotal: {}", registry.len());
}

fn generate_one(
    registry: &GeneratorRegistry,
    name: &str,
    frames: usize,
    rate: u32,
    bits: u32,
    output: &Path,
) -> i32 {
    let generator = match registry.lookup(name) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Available generators:");
            for known in registry.names() {
                eprintln!("  - {known}");
            }
            return 1;
        }
    };

    match generate_and_export(name, generator.as_ref(), frames, rate, bits, output) {
        Ok(path) => {
            println!("Success! File: {}", path.display());
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Build one wavetable and write it to disk.
fn generate_and_export(
    name: &str,
    generator: &dyn WaveformGenerator,
    frames: usize,
    rate: u32,
    bits: u32,
    output: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let bit_depth = BitDepth::from_bits(bits)?;
    let rate = validate_sample_rate(rate)?;

    log::info!("Generating {name}: {frames} frames, {rate} Hz, {bits} bit");
    let table = build(generator, frames, FRAME_SIZE)?;
    if !table.is_finite() {
        return Err(WavetableError::NonFiniteOutput(name.to_string()).into());
    }

    let id = generator.info().id;
    let path = export_wavetable(&id, &table.into_f32(), frames, output, rate, bit_depth)?;
    Ok(path)
}

fn validate_generators(registry: &GeneratorRegistry) -> bool {
    let theta = phase_array(VALIDATION_FRAME_SIZE);
    println!("Validating {} generators", registry.len());

    let mut all_valid = true;
    for name in registry.names() {
        let Ok(generator) = registry.lookup(&name) else {
            continue;
        };
        match validate_one(generator.as_ref(), &theta) {
            Ok(()) => println!("  ok   {name}"),
            Err(reason) => {
                println!("  FAIL {name}: {reason}");
                all_valid = false;
            }
        }
    }

    if all_valid {
        println!("All generators are valid");
    } else {
        println!("Some generators have errors");
    }
    all_valid
}

fn validate_one(generator: &dyn WaveformGenerator, theta: &[f64]) -> Result<(), String> {
    generator.info().validate().map_err(|e| e.to_string())?;

    for u in MORPH_GRID {
        let row = generator.generate(theta, u);
        if row.len() != theta.len() {
            return Err(format!(
                "returned {} samples at u={u}, expected {}",
                row.len(),
                theta.len()
            ));
        }
        if !row.iter().all(|s| s.is_finite()) {
            return Err(format!("non-finite sample at u={u}"));
        }
    }
    Ok(())
}

fn batch_generate(registry: &GeneratorRegistry, output: &Path) -> i32 {
    let names = registry.names();
    let total =
        names.len() * BATCH_FRAME_COUNTS.len() * BATCH_SAMPLE_RATES.len() * BATCH_BIT_DEPTHS.len();
    println!(
        "Generating {total} wavetables for {} generators...",
        names.len()
    );

    let mut generated = 0_usize;
    let mut item = 0_usize;
    for name in &names {
        let Ok(generator) = registry.lookup(name) else {
            continue;
        };
        for frames in BATCH_FRAME_COUNTS {
            for rate in BATCH_SAMPLE_RATES {
                for bits in BATCH_BIT_DEPTHS {
                    item += 1;
                    println!("  [{item}/{total}] {name}: {frames} frames, {rate} Hz, {bits} bit");
                    match generate_and_export(name, generator.as_ref(), frames, rate, bits, output)
                    {
                        Ok(_) => generated += 1,
                        Err(e) => eprintln!("    Error: {e}"),
                    }
                }
            }
        }
    }

    println!(
        "Generation complete: {generated}/{total} wavetables in {}",
        output.display()
    );
    if generated == total {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wavemorph", "sine_to_triangle"]);
        assert_eq!(cli.waveform.as_deref(), Some("sine_to_triangle"));
        assert_eq!(cli.frames, 256);
        assert_eq!(cli.rate, 44100);
        assert_eq!(cli.bits, 16);
        assert_eq!(cli.output, PathBuf::from("wavetable_dist"));
        assert!(!cli.list && !cli.validate && !cli.batch);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "wavemorph",
            "square_pwm_tz",
            "-f",
            "64",
            "-r",
            "48000",
            "-b",
            "24",
            "-o",
            "/tmp/out",
        ]);
        assert_eq!(cli.frames, 64);
        assert_eq!(cli.rate, 48000);
        assert_eq!(cli.bits, 24);
        assert_eq!(cli.output, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_unknown_generator_exit_code() {
        let registry = builtin_registry().unwrap();
        let code = generate_one(
            &registry,
            "does_not_exist",
            4,
            44100,
            16,
            Path::new("/tmp/unused"),
        );
        assert_eq!(code, 1);
    }

    #[test]
    fn test_validate_builtins_passes() {
        let registry = builtin_registry().unwrap();
        assert!(validate_generators(&registry));
    }
}
