//! Preset registry: keys, the mutable build phase, and the sealed read side

use crate::error::{ConfigError, Result};
use crate::params::ParameterSet;
use crate::presets;
use crate::schema::Schema;
use crate::types::{StrategyFamily, Symbol, Timeframe};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Identity of one preset: strategy family, instrument, bar period.
///
/// The key always carries symbol and timeframe; parameter sets never embed
/// them. Keys order by family, then symbol, then timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PresetKey {
    pub family: StrategyFamily,
    pub symbol: Symbol,
    pub timeframe: Timeframe,
}

impl PresetKey {
    pub fn new(family: StrategyFamily, symbol: impl Into<Symbol>, timeframe: Timeframe) -> Self {
        PresetKey {
            family,
            symbol: symbol.into(),
            timeframe,
        }
    }
}

impl fmt::Display for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.family, self.symbol, self.timeframe)
    }
}

/// Mutable build phase of the registry.
///
/// All registration happens here, on one thread, before any strategy logic
/// runs. `seal` consumes the builder, so further registration is ruled out
/// by construction rather than by a runtime flag.
#[derive(Debug, Default)]
pub struct PresetRegistryBuilder {
    presets: BTreeMap<PresetKey, ParameterSet>,
}

impl PresetRegistryBuilder {
    pub fn new() -> Self {
        PresetRegistryBuilder::default()
    }

    /// Builder pre-seeded with the built-in preset table
    pub fn with_builtin() -> Self {
        let mut builder = PresetRegistryBuilder::new();
        presets::register_builtin(&mut builder).expect("built-in presets match their schemas");
        builder
    }

    /// Register one preset.
    ///
    /// The parameter set must match the family schema exactly and the key
    /// must be unused; on a duplicate the first registration is retained.
    /// A failed call registers nothing.
    pub fn register(&mut self, key: PresetKey, params: ParameterSet) -> Result<()> {
        Schema::of(key.family).validate(&params)?;
        if self.presets.contains_key(&key) {
            return Err(ConfigError::DuplicateKey { key });
        }
        debug!(%key, fields = params.len(), "registered preset");
        self.presets.insert(key, params);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Freeze the registry; only reads from here on
    pub fn seal(self) -> PresetRegistry {
        info!(presets = self.presets.len(), "preset registry sealed");
        PresetRegistry {
            presets: self.presets,
        }
    }
}

/// Read-only preset table handed to the strategy runtime.
///
/// Immutable after `seal`, so concurrent lookups from strategy-evaluation
/// threads need no locking.
#[derive(Debug)]
pub struct PresetRegistry {
    presets: BTreeMap<PresetKey, ParameterSet>,
}

impl PresetRegistry {
    /// Registry holding exactly the built-in presets
    pub fn builtin() -> Self {
        PresetRegistryBuilder::with_builtin().seal()
    }

    /// Parameter set for an exact key.
    ///
    /// No fuzzy or partial matching: a preset tuned for H4 is never served
    /// to an M1 chart.
    pub fn lookup(&self, key: &PresetKey) -> Result<&ParameterSet> {
        self.presets
            .get(key)
            .ok_or_else(|| ConfigError::NotFound { key: key.clone() })
    }

    /// Non-error form of `lookup` for callers probing optional presets
    pub fn get(&self, key: &PresetKey) -> Option<&ParameterSet> {
        self.presets.get(key)
    }

    /// Snapshot of all keys in ascending key order
    pub fn list_keys(&self) -> Vec<PresetKey> {
        self.presets.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PresetKey, &ParameterSet)> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppliedPrice;

    fn cci_key(timeframe: Timeframe) -> PresetKey {
        PresetKey::new(StrategyFamily::Cci, "EURUSD", timeframe)
    }

    fn cci_params() -> ParameterSet {
        ParameterSet::new()
            .with("Period", 2u32)
            .with("AppliedPrice", AppliedPrice::Low)
            .with("Shift", 0u32)
            .with("TrailingStopMethod", 6u32)
            .with("SignalOpenLevel", 36.0)
            .with("MaxSpread", 6.0)
    }

    #[test]
    fn test_key_display() {
        let key = PresetKey::new(StrategyFamily::CciArrows, "EURUSD", Timeframe::H4);
        assert_eq!(key.to_string(), "CCI_Arrows/EURUSD/H4");
    }

    #[test]
    fn test_register_then_lookup_round_trip() {
        let mut builder = PresetRegistryBuilder::new();
        builder.register(cci_key(Timeframe::H1), cci_params()).unwrap();
        let registry = builder.seal();

        assert_eq!(registry.lookup(&cci_key(Timeframe::H1)), Ok(&cci_params()));
    }

    #[test]
    fn test_lookup_misses_with_not_found() {
        let registry = PresetRegistryBuilder::new().seal();
        let key = cci_key(Timeframe::H1);

        assert_eq!(
            registry.lookup(&key),
            Err(ConfigError::NotFound { key: key.clone() })
        );
        assert_eq!(registry.get(&key), None);
    }

    #[test]
    fn test_duplicate_key_keeps_first_registration() {
        let mut builder = PresetRegistryBuilder::new();
        builder.register(cci_key(Timeframe::H1), cci_params()).unwrap();

        let second = cci_params().with("MaxSpread", 99.0);
        let err = builder.register(cci_key(Timeframe::H1), second);
        assert_eq!(
            err,
            Err(ConfigError::DuplicateKey {
                key: cci_key(Timeframe::H1)
            })
        );

        let registry = builder.seal();
        let params = registry.lookup(&cci_key(Timeframe::H1)).unwrap();
        assert_eq!(params.float("MaxSpread"), Some(6.0));
    }

    #[test]
    fn test_failed_registration_registers_nothing() {
        let mut builder = PresetRegistryBuilder::new();
        let incomplete = ParameterSet::new().with("Period", 2u32);

        assert!(builder
            .register(cci_key(Timeframe::H1), incomplete)
            .is_err());
        assert!(builder.is_empty());

        let registry = builder.seal();
        assert_eq!(
            registry.lookup(&cci_key(Timeframe::H1)),
            Err(ConfigError::NotFound {
                key: cci_key(Timeframe::H1)
            })
        );
    }

    #[test]
    fn test_list_keys_is_sorted_and_complete() {
        let mut builder = PresetRegistryBuilder::new();
        builder.register(cci_key(Timeframe::H4), cci_params()).unwrap();
        builder.register(cci_key(Timeframe::M1), cci_params()).unwrap();
        builder
            .register(
                PresetKey::new(StrategyFamily::Cci, "AUDUSD", Timeframe::H1),
                cci_params(),
            )
            .unwrap();
        let registry = builder.seal();

        assert_eq!(
            registry.list_keys(),
            vec![
                PresetKey::new(StrategyFamily::Cci, "AUDUSD", Timeframe::H1),
                cci_key(Timeframe::M1),
                cci_key(Timeframe::H4),
            ]
        );
    }

    #[test]
    fn test_sealed_registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PresetRegistry>();
    }
}
