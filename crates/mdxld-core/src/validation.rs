//! # Validation Results
//!
//! Every failure the validator can report is a [`ValidationIssue`]. Its
//! `Display` output is the message shown to the user, one per error, so
//! the strings here are part of the public contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::ValueKind;
use crate::vocabulary::Vocabulary;

/// A single reason a document failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// No type URI was supplied.
    #[error("Missing schema type")]
    MissingType,

    /// The type URI is malformed or has no local name.
    #[error("Invalid schema type URL format")]
    InvalidTypeUri,

    /// The type URI does not belong to a recognized vocabulary.
    #[error("Unsupported schema type: {type_uri}")]
    UnsupportedVocabulary {
        /// The type URI as supplied.
        type_uri: String,
    },

    /// The document carries no `$context`.
    #[error("Missing $context field")]
    MissingContext,

    /// The document's `$context` is not a recognized vocabulary.
    #[error("Unsupported context: {context}")]
    UnsupportedContext {
        /// The context value as supplied.
        context: String,
    },

    /// The vocabulary is recognized but has no validator.
    #[error("{} validation not implemented", .vocabulary.display_name())]
    VocabularyNotImplemented {
        /// The vocabulary that was requested.
        vocabulary: Vocabulary,
    },

    /// The type definition could not be fetched.
    #[error("Failed to fetch {} definition: {reason}", .vocabulary.display_name())]
    DefinitionFetchFailed {
        /// Vocabulary whose definition was requested.
        vocabulary: Vocabulary,
        /// Status reason phrase or transport error.
        reason: String,
    },

    /// A property the schema requires is absent.
    #[error("Missing required field: {name}")]
    MissingRequiredField {
        /// Name of the absent property.
        name: String,
    },

    /// A property value satisfies none of its accepted kinds.
    #[error("Invalid type for {name}: expected one of [{}]", join_kinds(.expected))]
    InvalidPropertyType {
        /// Property name.
        name: String,
        /// Accepted kinds in schema declaration order.
        expected: Vec<ValueKind>,
    },

    /// Any other failure during lookup or parsing.
    #[error("{message}")]
    UnknownFailure {
        /// The failure's message.
        message: String,
    },
}

fn join_kinds(kinds: &[ValueKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of validating one document.
///
/// `is_valid` is true iff `errors` is empty. The serialized form is
/// `{"isValid": bool, "errors": [..]}` with `errors` omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff no errors were produced.
    pub is_valid: bool,
    /// Human-readable error messages, in the order they were found.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// A result carrying a single issue.
    pub fn invalid(issue: ValidationIssue) -> Self {
        Self::from_issues(vec![issue])
    }

    /// Build a result from accumulated issues; valid iff `issues` is empty.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
        }
    }

    /// True if some error message equals `message` exactly.
    pub fn has_error(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }
}

impl From<ValidationIssue> for ValidationResult {
    fn from(issue: ValidationIssue) -> Self {
        Self::invalid(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_messages_are_stable() {
        assert_eq!(ValidationIssue::MissingType.to_string(), "Missing schema type");
        assert_eq!(
            ValidationIssue::UnsupportedVocabulary {
                type_uri: "https://example.org/Thing".into()
            }
            .to_string(),
            "Unsupported schema type: https://example.org/Thing"
        );
        assert_eq!(
            ValidationIssue::VocabularyNotImplemented {
                vocabulary: Vocabulary::Gs1
            }
            .to_string(),
            "GS1 validation not implemented"
        );
        assert_eq!(
            ValidationIssue::VocabularyNotImplemented {
                vocabulary: Vocabulary::MdxOrgAi
            }
            .to_string(),
            "MDX.org.ai validation not implemented"
        );
        assert_eq!(
            ValidationIssue::DefinitionFetchFailed {
                vocabulary: Vocabulary::SchemaOrg,
                reason: "Not Found".into()
            }
            .to_string(),
            "Failed to fetch schema.org definition: Not Found"
        );
        assert_eq!(
            ValidationIssue::MissingRequiredField {
                name: "headline".into()
            }
            .to_string(),
            "Missing required field: headline"
        );
        assert_eq!(ValidationIssue::MissingContext.to_string(), "Missing $context field");
    }

    #[test]
    fn invalid_type_lists_kinds_in_order() {
        let issue = ValidationIssue::InvalidPropertyType {
            name: "url".into(),
            expected: vec![ValueKind::Url, ValueKind::Text],
        };
        assert_eq!(issue.to_string(), "Invalid type for url: expected one of [URL, Text]");
    }

    #[test]
    fn result_validity_tracks_errors() {
        assert!(ValidationResult::from_issues(vec![]).is_valid);
        let r = ValidationResult::from_issues(vec![
            ValidationIssue::MissingType,
            ValidationIssue::MissingContext,
        ]);
        assert!(!r.is_valid);
        assert_eq!(r.errors.len(), 2);
        assert!(r.has_error("Missing schema type"));
    }

    #[test]
    fn result_serializes_camel_case_and_omits_empty_errors() {
        let json = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(json, serde_json::json!({ "isValid": true }));

        let json = serde_json::to_value(ValidationResult::invalid(ValidationIssue::MissingType))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "isValid": false, "errors": ["Missing schema type"] })
        );
    }
}
