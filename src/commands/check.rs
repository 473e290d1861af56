//! Validate a preset file against the family schemas

use anyhow::Result;

use strategy_presets::{PresetFile, PresetRegistryBuilder};

pub fn run(file: String) -> Result<()> {
    let preset_file = PresetFile::from_file(&file)?;

    println!("{}", "=".repeat(60));
    println!("Checking {}", file);
    println!("{}", "=".repeat(60));

    // Loading over the built-ins also catches keys that would collide with
    // the shipped table.
    let mut builder = PresetRegistryBuilder::with_builtin();
    let builtin = builder.len();
    let loaded = preset_file.register_into(&mut builder)?;

    for entry in &preset_file.presets {
        println!("  ok  {}", entry.key());
    }
    println!(
        "{} presets loaded cleanly ({} built-in, {} total)",
        loaded,
        builtin,
        builder.len()
    );

    Ok(())
}
