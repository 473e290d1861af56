//! CLI subcommand implementations

pub mod check;
pub mod list;
pub mod show;

use anyhow::Result;

use strategy_presets::{PresetFile, PresetRegistry, PresetRegistryBuilder};

/// Built-in registry, extended with a preset file when one is given
pub(crate) fn build_registry(file: Option<&str>) -> Result<PresetRegistry> {
    let mut builder = PresetRegistryBuilder::with_builtin();
    if let Some(path) = file {
        PresetFile::from_file(path)?.register_into(&mut builder)?;
    }
    Ok(builder.seal())
}
