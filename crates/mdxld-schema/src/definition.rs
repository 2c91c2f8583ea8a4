//! # Schema Definitions
//!
//! A [`SchemaDefinition`] is the resolved property table of one vocabulary
//! type. It is built fresh for each validation call and dropped afterwards;
//! nothing is cached between calls.
//!
//! [`SchemaDefinition::check`] applies the table to a property bag:
//!
//! 1. each required property absent from the bag is one issue, in
//!    declaration order;
//! 2. each present property with declared kinds must match at least one of
//!    them, otherwise one issue listing the kinds in declaration order;
//! 3. properties the table does not mention are never flagged.

use std::collections::BTreeMap;

use mdxld_core::{matches_any, PropertyValue, ValidationIssue, ValueKind};
use serde::{Deserialize, Serialize};

/// Resolved description of one vocabulary type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDefinition {
    /// Local type name, e.g. `Article`.
    pub type_name: String,
    /// Property name to accepted kinds, in declaration order.
    pub properties: BTreeMap<String, Vec<ValueKind>>,
    /// Properties a conforming document must carry.
    #[serde(default)]
    pub required_properties: Vec<String>,
}

impl SchemaDefinition {
    /// An empty definition for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Builder: declare the accepted kinds for a property.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        kinds: impl IntoIterator<Item = ValueKind>,
    ) -> Self {
        self.declare(name, kinds);
        self
    }

    /// Builder: mark a property as required.
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.require(name);
        self
    }

    /// Declare kinds for a property. Kinds already declared are not repeated.
    pub fn declare(&mut self, name: impl Into<String>, kinds: impl IntoIterator<Item = ValueKind>) {
        let entry = self.properties.entry(name.into()).or_default();
        for kind in kinds {
            if !entry.contains(&kind) {
                entry.push(kind);
            }
        }
    }

    /// Mark a property as required. Duplicates are ignored.
    pub fn require(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.required_properties.contains(&name) {
            self.required_properties.push(name);
        }
    }

    /// Accepted kinds for `name`, if the property is constrained.
    pub fn accepted_kinds(&self, name: &str) -> Option<&[ValueKind]> {
        self.properties
            .get(name)
            .map(Vec::as_slice)
            .filter(|kinds| !kinds.is_empty())
    }

    /// Check a property bag against this definition.
    pub fn check(&self, properties: &BTreeMap<String, PropertyValue>) -> Vec<ValidationIssue> {
        let mut issues: Vec<ValidationIssue> = self
            .required_properties
            .iter()
            .filter(|name| !properties.contains_key(name.as_str()))
            .map(|name| ValidationIssue::MissingRequiredField { name: name.clone() })
            .collect();

        for (name, value) in properties {
            let Some(expected) = self.accepted_kinds(name) else {
                continue;
            };
            if !matches_any(value, expected) {
                issues.push(ValidationIssue::InvalidPropertyType {
                    name: name.clone(),
                    expected: expected.to_vec(),
                });
            }
        }

        issues
    }
}
