//! # Structured Lookup
//!
//! Fetches a machine-readable definition (`Accept: application/json`) and
//! reads the property table directly. Two JSON shapes are accepted:
//!
//! ```json
//! { "typeName": "Article",
//!   "requiredProperties": ["headline"],
//!   "properties": { "headline": ["Text"], "url": "URL" } }
//! ```
//!
//! and the JSON-LD flavored shape:
//!
//! ```json
//! { "@type": "rdfs:Class",
//!   "schema:required": [{ "@value": "headline" }],
//!   "properties": {
//!     "headline": { "@type": "Property",
//!                   "schema:rangeIncludes": [{ "@id": "schema:Text" }] } } }
//! ```
//!
//! Single values may appear bare instead of in an array, and both
//! required-property spellings may appear together; their names are merged.
//!
//! Range tokens are parsed with [`ValueKind::parse`]; tokens that are not
//! one of the five primitive kinds are kept as `Unknown` and never match.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mdxld_core::ValueKind;
use serde::Deserialize;

use crate::config::SchemaOrgConfig;
use crate::definition::SchemaDefinition;
use crate::error::SchemaError;
use crate::source::{HttpFetcher, SchemaDefinitionSource};

const ACCEPT_JSON: &str = "application/json, application/ld+json;q=0.9";

/// Definition source reading a JSON document per type.
#[derive(Debug, Clone)]
pub struct StructuredSource {
    fetcher: HttpFetcher,
}

impl StructuredSource {
    /// Create a structured source from configuration.
    pub fn new(config: &SchemaOrgConfig) -> Result<Self, SchemaError> {
        Ok(Self::from_fetcher(HttpFetcher::new(config)?))
    }

    pub(crate) fn from_fetcher(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl SchemaDefinitionSource for StructuredSource {
    fn name(&self) -> &str {
        "structured"
    }

    async fn fetch_definition(&self, type_name: &str) -> Result<SchemaDefinition, SchemaError> {
        let (url, body) = self.fetcher.get_text(type_name, ACCEPT_JSON).await?;
        parse_definition(type_name, &body).map_err(|e| SchemaError::Parse {
            url,
            reason: e.to_string(),
        })
    }
}

/// Build a definition from a structured JSON document.
///
/// `type_name` is used when the document does not name its type.
pub fn parse_definition(type_name: &str, json: &str) -> Result<SchemaDefinition, serde_json::Error> {
    let wire: WireDefinition = serde_json::from_str(json)?;

    let mut definition = SchemaDefinition::new(wire.type_name.unwrap_or_else(|| type_name.to_string()));
    for (name, range) in wire.properties {
        definition.declare(name, range.into_tokens().iter().map(|t| ValueKind::parse(t)));
    }
    let required = wire.required.into_vec().into_iter();
    for name in required.chain(wire.schema_required.into_vec()) {
        definition.require(name.into_name());
    }
    Ok(definition)
}

// -- Wire types ---------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WireDefinition {
    #[serde(rename = "typeName", default)]
    type_name: Option<String>,
    #[serde(default)]
    properties: BTreeMap<String, WireRange>,
    #[serde(rename = "requiredProperties", default)]
    required: OneOrMany<WireRequired>,
    #[serde(rename = "schema:required", default)]
    schema_required: OneOrMany<WireRequired>,
}

/// JSON-LD writes a single value bare and several as an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// A property's range: one token, a list, or a property node.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireRange {
    One(String),
    Many(Vec<WireRef>),
    Node(WirePropertyNode),
}

impl WireRange {
    fn into_tokens(self) -> Vec<String> {
        match self {
            Self::One(token) => vec![token],
            Self::Many(refs) => refs.into_iter().map(WireRef::into_token).collect(),
            Self::Node(node) => node
                .range_includes
                .into_vec()
                .into_iter()
                .map(WireRef::into_token)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WirePropertyNode {
    #[serde(rename = "rangeIncludes", alias = "schema:rangeIncludes", default)]
    range_includes: OneOrMany<WireRef>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireRef {
    Token(String),
    Id {
        #[serde(rename = "@id")]
        id: String,
    },
}

impl WireRef {
    fn into_token(self) -> String {
        match self {
            Self::Token(t) => t,
            Self::Id { id } => id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireRequired {
    Name(String),
    Value {
        #[serde(rename = "@value")]
        value: String,
    },
}

impl WireRequired {
    fn into_name(self) -> String {
        match self {
            Self::Name(n) => n,
            Self::Value { value } => value,
        }
    }
}
