//! Preset file loading.
//!
//! Optional JSON preset files extend the built-in table. The crate only
//! provides the mechanism; which files to load, and when, stays with the
//! caller.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::registry::{PresetKey, PresetRegistryBuilder};
use crate::schema::Schema;
use crate::types::{StrategyFamily, Symbol, Timeframe};

/// One entry of a preset file
#[derive(Debug, Clone, Deserialize)]
pub struct PresetEntry {
    pub strategy: StrategyFamily,
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    /// Raw fields, converted against the family schema at registration
    pub params: serde_json::Map<String, serde_json::Value>,
}

impl PresetEntry {
    pub fn key(&self) -> PresetKey {
        PresetKey::new(self.strategy, self.symbol.clone(), self.timeframe)
    }
}

/// A parsed preset file
#[derive(Debug, Clone, Deserialize)]
pub struct PresetFile {
    pub presets: Vec<PresetEntry>,
}

impl PresetFile {
    /// Load a preset file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset file {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse preset file {}", path.display()))
    }

    /// Parse preset-file JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let file: PresetFile = serde_json::from_str(json).context("Failed to parse preset JSON")?;
        Ok(file)
    }

    /// Convert and register every entry into a builder.
    ///
    /// Each entry goes through the family schema, so field kinds and
    /// completeness are enforced before anything lands in the registry.
    /// The first bad entry aborts the load, naming the offending key; a
    /// misconfigured strategy must not silently run with wrong settings.
    pub fn register_into(&self, builder: &mut PresetRegistryBuilder) -> Result<usize> {
        for entry in &self.presets {
            let key = entry.key();
            let params = Schema::of(entry.strategy)
                .parameter_set_from_json(&entry.params)
                .with_context(|| format!("Invalid preset for {}", key))?;
            builder
                .register(key.clone(), params)
                .with_context(|| format!("Failed to register preset for {}", key))?;
        }
        debug!(presets = self.presets.len(), "registered preset file entries");
        Ok(self.presets.len())
    }
}
