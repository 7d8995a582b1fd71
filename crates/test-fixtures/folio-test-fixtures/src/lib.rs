//! Shared tween fixtures. `fixtures/manifest.json` maps a fixture name to a
//! stored tween JSON file under the workspace `fixtures/` directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    // Sorted so callers iterate fixtures deterministically.
    tweens: BTreeMap<String, String>,
}

/// Stored tween JSON documents (mascot motions).
pub mod tweens {
    use super::*;

    /// Fixture names in sorted order.
    pub fn keys() -> Vec<String> {
        MANIFEST.tweens.keys().cloned().collect()
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = MANIFEST
            .tweens
            .get(name)
            .ok_or_else(|| anyhow!("unknown tween fixture '{name}'"))?;
        Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    /// Raw JSON text, ready for `parse_stored_tween_json`.
    pub fn json(name: &str) -> Result<String> {
        let file = path(name)?;
        fs::read_to_string(&file)
            .with_context(|| format!("reading tween fixture '{name}' from {}", file.display()))
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("decoding tween fixture '{name}'"))
    }
}
