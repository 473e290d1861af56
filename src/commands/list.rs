//! List every registered preset

use anyhow::Result;
use itertools::Itertools;

use super::build_registry;

pub fn run(file: Option<String>, json: bool) -> Result<()> {
    let registry = build_registry(file.as_deref())?;

    if json {
        let entries: Vec<serde_json::Value> = registry
            .iter()
            .map(|(key, params)| serde_json::json!({ "key": key, "params": params }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "=".repeat(60));
    println!("Registered presets ({})", registry.len());
    println!("{}", "=".repeat(60));
    for (key, params) in registry.iter() {
        println!("{:<28} {:>2} fields", key.to_string(), params.len());
    }

    let families = registry
        .iter()
        .map(|(key, _)| key.family)
        .unique()
        .join(", ");
    let symbols = registry
        .iter()
        .map(|(key, _)| key.symbol.as_str())
        .unique()
        .join(", ");
    println!("{}", "=".repeat(60));
    println!("Families:    {}", families);
    println!("Instruments: {}", symbols);

    Ok(())
}
