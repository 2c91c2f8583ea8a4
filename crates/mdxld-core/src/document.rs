//! # Linked Documents
//!
//! The unit of validation: a semantic type/context pair, a bag of
//! front-matter properties, and an opaque Markdown body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::PropertyValue;

/// An MDX-LD document.
///
/// An absent `type_uri` is a valid "untyped" state; validating an untyped
/// document always fails with `Missing schema type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedDocument {
    /// Semantic type URI, e.g. `https://schema.org/Article`.
    #[serde(rename = "$type", default, skip_serializing_if = "Option::is_none")]
    pub type_uri: Option<String>,
    /// Vocabulary namespace URI, e.g. `https://schema.org`.
    #[serde(rename = "$context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Front-matter properties other than `$type` / `$context`.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
}

impl LinkedDocument {
    /// An untyped document with the given body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Builder: set the type URI.
    pub fn with_type(mut self, type_uri: impl Into<String>) -> Self {
        self.type_uri = Some(type_uri.into());
        self
    }

    /// Builder: set the context URI.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Builder: insert a property, replacing any previous value.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Look up a property.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// The type URI if present and non-blank.
    pub fn declared_type(&self) -> Option<&str> {
        self.type_uri.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// The context URI if present and non-blank.
    pub fn declared_context(&self) -> Option<&str> {
        self.context.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}
