//! Per-family parameter schemas.
//!
//! Every strategy family declares the exact fields its presets must carry.
//! All fields are required; a set matches a schema iff it holds every
//! schema field with the right kind and nothing else. Missing fields are
//! a construction-time error, never a runtime default substitution.

use crate::error::{ConfigError, SchemaViolation};
use crate::params::{ParamValue, ParameterSet};
use crate::types::{AppliedPrice, StrategyFamily};
use std::fmt;

/// Kind of value a schema field requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Price,
}

impl FieldKind {
    /// Kind of a concrete value
    pub fn of(value: ParamValue) -> FieldKind {
        match value {
            ParamValue::Int(_) => FieldKind::Int,
            ParamValue::Float(_) => FieldKind::Float,
            ParamValue::Price(_) => FieldKind::Price,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Price => "price",
        };
        write!(f, "{}", name)
    }
}

/// One required field of a family schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

const CCI_FIELDS: &[FieldSpec] = &[
    field("Period", FieldKind::Int),
    field("AppliedPrice", FieldKind::Price),
    field("Shift", FieldKind::Int),
    field("TrailingStopMethod", FieldKind::Int),
    field("SignalOpenLevel", FieldKind::Float),
    field("MaxSpread", FieldKind::Float),
];

const CCI_ARROWS_FIELDS: &[FieldSpec] = &[
    field("Period", FieldKind::Int),
    field("AppliedPrice", FieldKind::Price),
    field("Shift", FieldKind::Int),
    field("SignalOpenMethod", FieldKind::Int),
    field("SignalOpenLevel", FieldKind::Float),
    field("SignalCloseMethod", FieldKind::Int),
    field("SignalCloseLevel", FieldKind::Float),
    field("PriceLimitMethod", FieldKind::Int),
    field("PriceLimitLevel", FieldKind::Float),
    field("TickFilterMethod", FieldKind::Int),
    field("MaxSpread", FieldKind::Float),
];

// CCIA predates the tick filter; otherwise the CCI_Arrows field set.
const CCIA_FIELDS: &[FieldSpec] = &[
    field("Period", FieldKind::Int),
    field("AppliedPrice", FieldKind::Price),
    field("Shift", FieldKind::Int),
    field("SignalOpenMethod", FieldKind::Int),
    field("SignalOpenLevel", FieldKind::Float),
    field("SignalCloseMethod", FieldKind::Int),
    field("SignalCloseLevel", FieldKind::Float),
    field("PriceLimitMethod", FieldKind::Int),
    field("PriceLimitLevel", FieldKind::Float),
    field("MaxSpread", FieldKind::Float),
];

/// Parameter schema of one strategy family
#[derive(Debug)]
pub struct Schema {
    family: StrategyFamily,
    fields: &'static [FieldSpec],
}

static CCI_SCHEMA: Schema = Schema {
    family: StrategyFamily::Cci,
    fields: CCI_FIELDS,
};

static CCI_ARROWS_SCHEMA: Schema = Schema {
    family: StrategyFamily::CciArrows,
    fields: CCI_ARROWS_FIELDS,
};

static CCIA_SCHEMA: Schema = Schema {
    family: StrategyFamily::Ccia,
    fields: CCIA_FIELDS,
};

impl Schema {
    /// Schema of a strategy family
    pub fn of(family: StrategyFamily) -> &'static Schema {
        match family {
            StrategyFamily::Cci => &CCI_SCHEMA,
            StrategyFamily::CciArrows => &CCI_ARROWS_SCHEMA,
            StrategyFamily::Ccia => &CCIA_SCHEMA,
        }
    }

    pub fn family(&self) -> StrategyFamily {
        self.family
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check a parameter set against this schema.
    ///
    /// Reports the first violation in schema field order: a missing field,
    /// a kind mismatch, then any field the schema does not define.
    pub fn validate(&self, params: &ParameterSet) -> Result<(), ConfigError> {
        for spec in self.fields {
            match params.get(spec.name) {
                None => {
                    return Err(
                        self.mismatch(SchemaViolation::MissingField(spec.name.to_string()))
                    );
                }
                Some(value) => {
                    let found = FieldKind::of(value);
                    if found != spec.kind {
                        return Err(self.mismatch(SchemaViolation::KindMismatch {
                            field: spec.name.to_string(),
                            expected: spec.kind,
                            found,
                        }));
                    }
                }
            }
        }
        for name in params.field_names() {
            if self.field(name).is_none() {
                return Err(self.mismatch(SchemaViolation::UnknownField(name.to_string())));
            }
        }
        Ok(())
    }

    /// Schema-directed conversion of raw JSON fields into a parameter set.
    ///
    /// Int fields take JSON integers, Float fields take any JSON number,
    /// Price fields take either a numeric series code or a series name.
    /// The converted set is validated before it is returned, so missing
    /// fields surface here too.
    pub fn parameter_set_from_json(
        &self,
        raw: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<ParameterSet, ConfigError> {
        let mut params = ParameterSet::new();
        for (name, value) in raw {
            let spec = self
                .field(name)
                .ok_or_else(|| self.mismatch(SchemaViolation::UnknownField(name.clone())))?;
            params.insert(name.clone(), self.convert(spec, value)?);
        }
        self.validate(&params)?;
        Ok(params)
    }

    fn convert(
        &self,
        spec: &FieldSpec,
        value: &serde_json::Value,
    ) -> Result<ParamValue, ConfigError> {
        let invalid = || {
            self.mismatch(SchemaViolation::InvalidValue {
                field: spec.name.to_string(),
                expected: spec.kind,
            })
        };
        match spec.kind {
            FieldKind::Int => value.as_i64().map(ParamValue::Int).ok_or_else(invalid),
            FieldKind::Float => value.as_f64().map(ParamValue::Float).ok_or_else(invalid),
            FieldKind::Price => match value {
                serde_json::Value::Number(number) => number
                    .as_u64()
                    .and_then(|code| u8::try_from(code).ok())
                    .and_then(AppliedPrice::from_code)
                    .map(ParamValue::Price)
                    .ok_or_else(invalid),
                serde_json::Value::String(name) => name
                    .parse::<AppliedPrice>()
                    .map(ParamValue::Price)
                    .map_err(|_| invalid()),
                _ => Err(invalid()),
            },
        }
    }

    fn mismatch(&self, violation: SchemaViolation) -> ConfigError {
        ConfigError::SchemaMismatch {
            family: self.family,
            violation,
        }
    }
}
