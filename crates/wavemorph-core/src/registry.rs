//! Name-to-generator lookup.
//!
//! The registry is populated in one explicit startup pass and only read
//! afterwards; registration takes `&mut self`, so a sealed registry shared
//! by reference cannot change under a running build.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, WavetableError};
use crate::generator::WaveformGenerator;

/// Registry mapping generator names to implementations.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn WaveformGenerator>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under `name`.
    ///
    /// Metadata is validated here rather than at call time. A name
    /// collision is a hard error so that batch output never depends on
    /// registration order.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        generator: Arc<dyn WaveformGenerator>,
    ) -> Result<()> {
        let name = name.into();
        generator.info().validate()?;
        if self.generators.contains_key(&name) {
            return Err(WavetableError::DuplicateName(name));
        }
        log::debug!("Registered generator '{name}'");
        self.generators.insert(name, generator);
        Ok(())
    }

    /// Resolve a generator by name.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn WaveformGenerator>> {
        self.generators
            .get(name)
            .cloned()
            .ok_or_else(|| WavetableError::UnknownGenerator(name.to_string()))
    }

    /// All registered names, sorted lexicographically.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.generators.keys().cloned().collect();
        names.sort();
        names
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorInfo;

    struct Stub(&'static str);

    impl WaveformGenerator for Stub {
        fn generate(&self, theta: &[f64], _u: f64) -> Vec<f64> {
            theta.iter().map(|t| t.sin()).collect()
        }

        fn info(&self) -> GeneratorInfo {
            GeneratorInfo {
                name: self.0.into(),
                id: self.0.into(),
                description: "stub".into(),
                author: String::new(),
                tags: vec![],
                collections: vec![],
                keywords: vec![],
                free: true,
            }
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = GeneratorRegistry::new();
        registry.register("stub", Arc::new(Stub("stub"))).unwrap();

        assert!(registry.contains("stub"));
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("stub").is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = GeneratorRegistry::new();
        registry.register("stub", Arc::new(Stub("stub"))).unwrap();

        let result = registry.register("stub", Arc::new(Stub("stub")));
        match result {
            Err(WavetableError::DuplicateName(name)) => assert_eq!(name, "stub"),
            other => panic!("Expected DuplicateName, got {other:?}"),
        }
        // The original registration survives.
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_generator() {
        let registry = GeneratorRegistry::new();
        match registry.lookup("missing") {
            Err(WavetableError::UnknownGenerator(name)) => assert_eq!(name, "missing"),
            other => panic!("Expected UnknownGenerator, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = GeneratorRegistry::new();
        registry.register("zeta", Arc::new(Stub("zeta"))).unwrap();
        registry.register("alpha", Arc::new(Stub("alpha"))).unwrap();
        registry.register("mid", Arc::new(Stub("mid"))).unwrap();

        assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_invalid_metadata_rejected_at_registration() {
        struct BadInfo;
        impl WaveformGenerator for BadInfo {
            fn generate(&self, theta: &[f64], _u: f64) -> Vec<f64> {
                vec![0.0; theta.len()]
            }
            fn info(&self) -> GeneratorInfo {
                GeneratorInfo {
                    name: String::new(),
                    id: "bad".into(),
                    description: "bad".into(),
                    author: String::new(),
                    tags: vec![],
                    collections: vec![],
                    keywords: vec![],
                    free: true,
                }
            }
        }

        let mut registry = GeneratorRegistry::new();
        let result = registry.register("bad", Arc::new(BadInfo));
        assert!(matches!(
            result,
            Err(WavetableError::InvalidMetadata { field: "name" })
        ));
        assert!(registry.is_empty());
    }
}
