//! # Front Matter
//!
//! Reads and writes the YAML block at the head of an MDX-LD file:
//!
//! ```text
//! ---
//! $type: https://schema.org/Article
//! $context: https://schema.org
//! headline: Hello
//! ---
//! # Markdown body
//! ```
//!
//! `$type` / `$context` (or their JSON-LD spellings `@type` / `@context`)
//! populate the document's type and context; every other key becomes a
//! property. A file without a leading `---` line is an untyped document
//! whose body is the whole file.

use serde_yaml::{Mapping, Value};

use crate::document::LinkedDocument;
use crate::error::DocumentError;
use crate::value::PropertyValue;

const FENCE: &str = "---";
const YAML_END: &str = "...";

const TYPE_KEYS: [&str; 2] = ["$type", "@type"];
const CONTEXT_KEYS: [&str; 2] = ["$context", "@context"];

/// Parse an MDX-LD source file.
pub fn parse(source: &str) -> Result<LinkedDocument, DocumentError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let yaml_start = match lines.next() {
        Some(first) if trim_newline(first) == FENCE => first.len(),
        _ => return Ok(LinkedDocument::new(source)),
    };

    let mut offset = yaml_start;
    let mut closing = None;
    for line in lines {
        let stripped = trim_newline(line);
        if stripped == FENCE || stripped == YAML_END {
            closing = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }
    let (yaml_end, body_start) = closing.ok_or(DocumentError::UnterminatedFrontMatter)?;
    let yaml = &source[yaml_start..yaml_end];

    let mut mapping = match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Mapping::new(),
        Value::Mapping(m) => m,
        other => {
            return Err(DocumentError::NotAMapping {
                found: yaml_kind(&other),
            })
        }
    };

    let type_uri = take_string(&mut mapping, &TYPE_KEYS)?;
    let context = take_string(&mut mapping, &CONTEXT_KEYS)?;

    let properties = match PropertyValue::from(Value::Mapping(mapping)) {
        PropertyValue::Object(map) => map,
        _ => Default::default(),
    };

    Ok(LinkedDocument {
        type_uri,
        context,
        properties,
        body: source[body_start..].to_string(),
    })
}

/// Render a document back to MDX-LD source.
///
/// Documents with no type, context or properties render as the bare body.
pub fn render(document: &LinkedDocument) -> Result<String, DocumentError> {
    let mut mapping = Mapping::new();
    if let Some(type_uri) = &document.type_uri {
        mapping.insert(Value::from(TYPE_KEYS[0]), Value::from(type_uri.as_str()));
    }
    if let Some(context) = &document.context {
        mapping.insert(Value::from(CONTEXT_KEYS[0]), Value::from(context.as_str()));
    }
    for (name, value) in &document.properties {
        mapping.insert(Value::from(name.as_str()), serde_yaml::to_value(value)?);
    }

    if mapping.is_empty() {
        return Ok(document.body.clone());
    }

    let yaml = serde_yaml::to_string(&mapping)?;
    Ok(format!("{FENCE}\n{yaml}{FENCE}\n{}", document.body))
}

/// Remove the first present key of `keys`; its value must be a string.
/// The remaining aliases stay in the mapping as ordinary properties.
fn take_string(mapping: &mut Mapping, keys: &[&str]) -> Result<Option<String>, DocumentError> {
    for key in keys {
        match mapping.remove(*key) {
            Some(Value::String(s)) => return Ok(Some(s)),
            Some(Value::Null) => return Ok(None),
            Some(_) => {
                return Err(DocumentError::InvalidField {
                    field: (*key).to_string(),
                })
            }
            None => continue,
        }
    }
    Ok(None)
}

fn trim_newline(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
