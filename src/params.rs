//! Parameter values and the immutable parameter bag presets are made of

use crate::types::AppliedPrice;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single tunable value inside a parameter set.
///
/// Whole-number tunables (periods, shifts, method codes) are `Int` even when
/// a strategy treats them as bitmasks; the registry never interprets method
/// codes, it only stores them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Price(AppliedPrice),
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<AppliedPrice> for ParamValue {
    fn from(v: AppliedPrice) -> Self {
        ParamValue::Price(v)
    }
}

impl ParamValue {
    pub fn as_int(self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_price(self) -> Option<AppliedPrice> {
        match self {
            ParamValue::Price(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Price(v) => write!(f, "{}", v),
        }
    }
}

/// Named parameter values for one preset.
///
/// Field names are unique; iteration order is the sorted field-name order,
/// so two equal sets always print and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    fields: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        ParameterSet::default()
    }

    /// Chainable insert for building sets inline
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Insert a field, returning any value it replaced
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.fields.get(name).copied()
    }

    /// Value of an `Int` field, `None` if absent or of another kind
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ParamValue::as_int)
    }

    /// Value of a `Float` field, `None` if absent or of another kind
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ParamValue::as_float)
    }

    /// Value of a `Price` field, `None` if absent or of another kind
    pub fn price(&self, name: &str) -> Option<AppliedPrice> {
        self.get(name).and_then(ParamValue::as_price)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FromIterator<(String, ParamValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        ParameterSet {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_typed_accessors() {
        let set = ParameterSet::new()
            .with("Period", 12u32)
            .with("MaxSpread", 6.0)
            .with("AppliedPrice", AppliedPrice::Typical);

        assert_eq!(set.len(), 3);
        assert_eq!(set.int("Period"), Some(12));
        assert_eq!(set.float("MaxSpread"), Some(6.0));
        assert_eq!(set.price("AppliedPrice"), Some(AppliedPrice::Typical));
    }

    #[test]
    fn test_typed_accessors_reject_other_kinds() {
        let set = ParameterSet::new().with("Period", 12u32);

        assert_eq!(set.float("Period"), None);
        assert_eq!(set.price("Period"), None);
        assert_eq!(set.int("Missing"), None);
    }

    #[test]
    fn test_insert_replaces_and_reports_old_value() {
        let mut set = ParameterSet::new().with("Shift", 0u32);
        let old = set.insert("Shift", 2u32);

        assert_eq!(old, Some(ParamValue::Int(0)));
        assert_eq!(set.int("Shift"), Some(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_is_sorted_by_field_name() {
        let set = ParameterSet::new()
            .with("Shift", 0u32)
            .with("AppliedPrice", AppliedPrice::Close)
            .with("Period", 21u32);

        let names: Vec<&str> = set.field_names().collect();
        assert_eq!(names, vec!["AppliedPrice", "Period", "Shift"]);
    }

    #[test]
    fn test_serializes_values_untagged() {
        let set = ParameterSet::new()
            .with("Period", 12u32)
            .with("MaxSpread", 6.0)
            .with("AppliedPrice", AppliedPrice::Low);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"AppliedPrice":"Low","MaxSpread":6.0,"Period":12}"#
        );
    }

    #[test]
    fn test_collects_from_pairs() {
        let set: ParameterSet = vec![
            ("Period".to_string(), ParamValue::Int(12)),
            ("MaxSpread".to_string(), ParamValue::Float(6.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.int("Period"), Some(12));
        assert_eq!(set.float("MaxSpread"), Some(6.0));
    }

    #[test]
    fn test_display_of_values() {
        assert_eq!(ParamValue::Int(36).to_string(), "36");
        assert_eq!(ParamValue::Float(2.5).to_string(), "2.5");
        assert_eq!(ParamValue::Price(AppliedPrice::Low).to_string(), "Low");
    }
}
