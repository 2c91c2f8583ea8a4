//! # Property Values
//!
//! Front-matter properties are arbitrary YAML/JSON values. Instead of
//! inspecting an untyped tree at validation time, every value is lifted
//! into [`PropertyValue`] once, at the document boundary.
//!
//! Numbers are held as `f64` (the widest kind the schema vocabularies
//! describe). `Date` only arises from programmatic construction: YAML and
//! JSON carry dates as strings, which stay [`PropertyValue::Text`] and are
//! recognized as dates by the compatibility predicate.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single front-matter property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Explicit `null` / `~`.
    Null,
    /// `true` / `false`.
    Boolean(bool),
    /// Any numeric value, including NaN and infinities.
    Number(f64),
    /// Any string.
    Text(String),
    /// A UTC instant constructed in code.
    Date(DateTime<Utc>),
    /// A YAML sequence / JSON array.
    List(Vec<PropertyValue>),
    /// A nested mapping.
    Object(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Short lowercase name of the value's shape, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Date(_) => "date",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Borrow the string content of a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn format_date(d: &DateTime<Utc>) -> String {
    d.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Render a non-string YAML mapping key as a property name.
fn yaml_key_to_string(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<serde_yaml::Value> for PropertyValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(s) => Self::Text(s),
            Value::Sequence(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (yaml_key_to_string(k), Self::from(v)))
                    .collect(),
            ),
            // Custom tags (`!Thing value`) carry no meaning for validation.
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Self::Text(s) => serializer.serialize_str(s),
            Self::Date(d) => serializer.serialize_str(&format_date(d)),
            Self::List(items) => serializer.collect_seq(items),
            Self::Object(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
