//! Shared keyframe fixtures for tests and benches.
//!
//! Documents live under `<workspace>/fixtures/` and are addressed by the names
//! listed in `fixtures/manifest.json`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Fixture name -> path relative to the fixtures directory, per category.
#[derive(Debug, Deserialize)]
struct Manifest {
    keyframes: BTreeMap<String, String>,
}

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures/manifest.json should parse")
});

/// Keyframe documents: JSON arrays of `{ "timestamp": .., <field>: .. }` objects.
pub mod keyframes {
    use super::*;

    /// Every registered keyframe fixture, sorted by name.
    pub fn keys() -> Vec<String> {
        MANIFEST.keyframes.keys().cloned().collect()
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = MANIFEST
            .keyframes
            .get(name)
            .with_context(|| format!("no keyframes fixture named '{name}'"))?;
        Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    /// Raw document text, for feeding the core JSON loader.
    pub fn json(name: &str) -> Result<String> {
        let path = path(name)?;
        std::fs::read_to_string(&path)
            .with_context(|| format!("reading keyframes fixture {}", path.display()))
    }

    /// Document deserialized straight through serde.
    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        serde_json::from_str(&json(name)?)
            .with_context(|| format!("decoding keyframes fixture '{name}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manifest_entry_resolves() {
        for key in keyframes::keys() {
            let path = keyframes::path(&key).unwrap();
            assert!(path.exists(), "missing fixture {}", path.display());
            let doc: serde_json::Value = keyframes::load(&key).unwrap();
            assert!(doc.is_array(), "fixture {key} should be an array");
        }
    }

    #[test]
    fn unknown_names_are_errors() {
        let err = keyframes::json("no-such-fixture").unwrap_err();
        assert!(err.to_string().contains("no-such-fixture"));
        assert!(keyframes::path("no-such-fixture").is_err());
    }

    #[test]
    fn keys_are_sorted() {
        let keys = keyframes::keys();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert!(keys.iter().any(|k| k == "sparse-fields"));
    }
}
