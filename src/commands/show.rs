//! Show one preset in full, fields in schema order

use anyhow::Result;

use strategy_presets::{PresetKey, Schema, StrategyFamily, Timeframe};

use super::build_registry;

pub fn run(
    strategy: String,
    symbol: String,
    timeframe: String,
    file: Option<String>,
    json: bool,
) -> Result<()> {
    let family: StrategyFamily = strategy.parse().map_err(anyhow::Error::msg)?;
    let timeframe: Timeframe = timeframe.parse().map_err(anyhow::Error::msg)?;
    let key = PresetKey::new(family, symbol, timeframe);

    let registry = build_registry(file.as_deref())?;
    let params = registry.lookup(&key)?;

    if json {
        let entry = serde_json::json!({ "key": key, "params": params });
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    println!("{}", "=".repeat(60));
    println!("Preset {}", key);
    println!("{}", "=".repeat(60));
    for spec in Schema::of(key.family).fields() {
        if let Some(value) = params.get(spec.name) {
            println!("{:<22} {:>10}   {}", spec.name, value.to_string(), spec.kind);
        }
    }

    Ok(())
}
