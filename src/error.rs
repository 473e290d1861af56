//! Error types for preset validation and registry access

use crate::registry::PresetKey;
use crate::schema::FieldKind;
use crate::types::StrategyFamily;
use thiserror::Error;

/// Why a parameter set failed validation against its family schema
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' expects {expected}, found {found}")]
    KindMismatch {
        field: String,
        expected: FieldKind,
        found: FieldKind,
    },

    #[error("field '{field}' holds no valid {expected} value")]
    InvalidValue { field: String, expected: FieldKind },
}

/// Errors raised by preset registration and lookup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("parameter set rejected by {family} schema: {violation}")]
    SchemaMismatch {
        family: StrategyFamily,
        violation: SchemaViolation,
    },

    #[error("preset already registered for {key}")]
    DuplicateKey { key: PresetKey },

    #[error("no preset registered for {key}")]
    NotFound { key: PresetKey },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Symbol, Timeframe};

    #[test]
    fn test_schema_mismatch_message_names_family_and_field() {
        let err = ConfigError::SchemaMismatch {
            family: StrategyFamily::Cci,
            violation: SchemaViolation::MissingField("Period".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("CCI"));
        assert!(msg.contains("Period"));
    }

    #[test]
    fn test_kind_mismatch_message_names_both_kinds() {
        let violation = SchemaViolation::KindMismatch {
            field: "MaxSpread".to_string(),
            expected: FieldKind::Float,
            found: FieldKind::Int,
        };
        let msg = violation.to_string();
        assert!(msg.contains("MaxSpread"));
        assert!(msg.contains("float"));
        assert!(msg.contains("int"));
    }

    #[test]
    fn test_not_found_message_spells_the_key() {
        let err = ConfigError::NotFound {
            key: PresetKey::new(StrategyFamily::CciArrows, Symbol::from("EURUSD"), Timeframe::M1),
        };
        assert_eq!(
            err.to_string(),
            "no preset registered for CCI_Arrows/EURUSD/M1"
        );
    }
}
