//! Built-in parameter presets.
//!
//! One module per strategy family, each holding:
//! - A typed parameter struct mirroring the family schema
//! - Named per-instrument constructors with the tuned literal values
//! - Conversions to and from the generic `ParameterSet` form
//!
//! `register_builtin` is the single entry point the registry builder
//! seeds from.

pub mod cci;
pub mod cci_arrows;
pub mod ccia;

use crate::error::{ConfigError, Result, SchemaViolation};
use crate::params::ParameterSet;
use crate::registry::PresetRegistryBuilder;
use crate::schema::FieldKind;
use crate::types::{AppliedPrice, StrategyFamily};

/// Register every built-in preset into a builder.
///
/// The shipped table is the EURUSD tunings: CCI H1, CCI_Arrows H4 and M1,
/// CCIA H1.
pub fn register_builtin(builder: &mut PresetRegistryBuilder) -> Result<()> {
    cci::register_builtin(builder)?;
    cci_arrows::register_builtin(builder)?;
    ccia::register_builtin(builder)?;
    Ok(())
}

// Field readers shared by the from_set conversions. The set has already
// been validated against the family schema when these run, so the error
// paths only fire on out-of-range integers.

pub(crate) fn int_u32(family: StrategyFamily, params: &ParameterSet, name: &str) -> Result<u32> {
    let value = params.int(name).ok_or_else(|| missing(family, name))?;
    u32::try_from(value).map_err(|_| ConfigError::SchemaMismatch {
        family,
        violation: SchemaViolation::InvalidValue {
            field: name.to_string(),
            expected: FieldKind::Int,
        },
    })
}

pub(crate) fn float(family: StrategyFamily, params: &ParameterSet, name: &str) -> Result<f64> {
    params.float(name).ok_or_else(|| missing(family, name))
}

pub(crate) fn price(
    family: StrategyFamily,
    params: &ParameterSet,
    name: &str,
) -> Result<AppliedPrice> {
    params.price(name).ok_or_else(|| missing(family, name))
}

fn missing(family: StrategyFamily, name: &str) -> ConfigError {
    ConfigError::SchemaMismatch {
        family,
        violation: SchemaViolation::MissingField(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PresetKey;
    use crate::schema::Schema;
    use crate::types::Timeframe;

    #[test]
    fn test_builtin_table_has_four_presets() {
        let mut builder = PresetRegistryBuilder::new();
        register_builtin(&mut builder).unwrap();
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn test_builtin_presets_cover_expected_keys() {
        let mut builder = PresetRegistryBuilder::new();
        register_builtin(&mut builder).unwrap();
        let registry = builder.seal();

        let expected = [
            PresetKey::new(StrategyFamily::Cci, "EURUSD", Timeframe::H1),
            PresetKey::new(StrategyFamily::CciArrows, "EURUSD", Timeframe::H4),
            PresetKey::new(StrategyFamily::CciArrows, "EURUSD", Timeframe::M1),
            PresetKey::new(StrategyFamily::Ccia, "EURUSD", Timeframe::H1),
        ];
        for key in &expected {
            assert!(registry.get(key).is_some(), "missing builtin {}", key);
        }
        assert_eq!(registry.len(), expected.len());
    }

    #[test]
    fn test_builtin_presets_match_their_schemas() {
        let mut builder = PresetRegistryBuilder::new();
        register_builtin(&mut builder).unwrap();
        let registry = builder.seal();

        for (key, params) in registry.iter() {
            assert!(Schema::of(key.family).validate(params).is_ok());
        }
    }
}
