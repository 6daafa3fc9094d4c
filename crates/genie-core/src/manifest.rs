//! Package manifest model (`package.json`)
//!
//! Installers never text-patch the manifest: it is deserialized, mutated,
//! and re-serialized whole, so the file stays valid JSON after every write.
//! Keys outside the modeled fields are preserved through the flattened map.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,

    /// Everything else in the manifest, carried through untouched
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl PackageManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Add or overwrite a dependency at a pinned version
    pub fn add_dependency(&mut self, name: &str, version: &str) {
        self.dependencies
            .insert(name.to_string(), version.to_string());
    }

    /// Add or overwrite a lifecycle script
    pub fn add_script(&mut self, name: &str, command: &str) {
        self.scripts.insert(name.to_string(), command.to_string());
    }
}
