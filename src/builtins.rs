//! Built-in generator registration.
//!
//! All shipped generators are registered here in one explicit startup
//! pass — there are no import-time side effects, so registration order is
//! visible and auditable. The returned registry is complete; callers only
//! read it afterwards.

use std::sync::Arc;

use wavemorph_core::{GeneratorRegistry, Result};
use wavemorph_waveforms::{LinearInterpolation, SineToSaw, SineToTriangle, SquarePwmTz};

/// Build the registry of shipped generators.
pub fn builtin_registry() -> Result<GeneratorRegistry> {
    let mut registry = GeneratorRegistry::new();

    registry.register("linear_interpolation", Arc::new(LinearInterpolation))?;
    registry.register("sine_to_saw", Arc::new(SineToSaw))?;
    registry.register("sine_to_triangle", Arc::new(SineToTriangle))?;
    registry.register("square_pwm_tz", Arc::new(SquarePwmTz))?;

    log::debug!("Registered {} built-in generators", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_contents() {
        let registry = builtin_registry().unwrap();
        assert_eq!(
            registry.names(),
            vec![
                "linear_interpolation",
                "sine_to_saw",
                "sine_to_triangle",
                "square_pwm_tz",
            ]
        );
    }

    #[test]
    fn test_builtin_ids_match_registered_names() {
        let registry = builtin_registry().unwrap();
        for name in registry.names() {
            let generator = registry.lookup(&name).unwrap();
            assert_eq!(generator.info().id, name);
        }
    }
}
