//! # Schema Type Validator
//!
//! Decides whether a document's properties conform to the value kinds of
//! its declared schema type, and enriches documents with vocabulary
//! metadata.
//!
//! ## Boundary Policy
//!
//! - `validate_type` / `validate_context` never return `Err`. Every failure
//!   becomes a [`ValidationIssue`] inside the [`ValidationResult`].
//! - `enrich` fails open: on any failure the original document comes back
//!   unchanged and the failure is logged.
//!
//! ## Request Model
//!
//! At most one definition fetch per call. The validator keeps no state
//! between calls; clones share the same source and may run concurrently.

use std::sync::Arc;

use mdxld_core::{
    local_type_name, LinkedDocument, PropertyValue, ValidationIssue, ValidationResult, Vocabulary,
};

use crate::config::SchemaOrgConfig;
use crate::definition::SchemaDefinition;
use crate::error::SchemaError;
use crate::source::{build_source, SchemaDefinitionSource};

/// Property keys written by enrichment.
pub const CONTEXT_KEY: &str = "@context";
pub const TYPE_KEY: &str = "@type";
pub const ID_KEY: &str = "@id";

/// Validates MDX-LD documents against vocabulary type definitions.
#[derive(Debug, Clone)]
pub struct SchemaTypeValidator {
    source: Arc<dyn SchemaDefinitionSource>,
}

impl SchemaTypeValidator {
    /// Create a validator over an explicit definition source.
    pub fn new(source: Arc<dyn SchemaDefinitionSource>) -> Self {
        Self { source }
    }

    /// Create a validator over the source selected by `config`.
    pub fn from_config(config: &SchemaOrgConfig) -> Result<Self, SchemaError> {
        Ok(Self::new(build_source(config)?))
    }

    /// Validate `document` against the type named by `type_uri`.
    ///
    /// The missing-type and vocabulary checks happen before any lookup.
    pub async fn validate_type(&self, type_uri: &str, document: &LinkedDocument) -> ValidationResult {
        let type_uri = type_uri.trim();
        if type_uri.is_empty() {
            return ValidationIssue::MissingType.into();
        }

        match Vocabulary::from_type_uri(type_uri) {
            Some(Vocabulary::SchemaOrg) => self.validate_schema_org(type_uri, document).await,
            Some(vocabulary) => ValidationIssue::VocabularyNotImplemented { vocabulary }.into(),
            None => ValidationIssue::UnsupportedVocabulary {
                type_uri: type_uri.to_string(),
            }
            .into(),
        }
    }

    /// Validate `document` by dispatching on its own `$context`.
    pub async fn validate_context(&self, document: &LinkedDocument) -> ValidationResult {
        let Some(context) = document.declared_context() else {
            return ValidationIssue::MissingContext.into();
        };

        match Vocabulary::from_context(context) {
            Some(Vocabulary::SchemaOrg) => {
                let type_uri = document.declared_type().unwrap_or_default();
                self.validate_type(type_uri, document).await
            }
            Some(vocabulary) => ValidationIssue::VocabularyNotImplemented { vocabulary }.into(),
            None => ValidationIssue::UnsupportedContext {
                context: context.to_string(),
            }
            .into(),
        }
    }

    /// Resolve the definition of a schema.org type URI.
    pub async fn definition(&self, type_uri: &str) -> Result<SchemaDefinition, SchemaError> {
        let type_uri = type_uri.trim();
        if Vocabulary::from_type_uri(type_uri) != Some(Vocabulary::SchemaOrg) {
            return Err(SchemaError::UnsupportedType(type_uri.to_string()));
        }
        let type_name =
            local_type_name(type_uri).ok_or_else(|| SchemaError::InvalidTypeUri(type_uri.to_string()))?;
        self.source.fetch_definition(&type_name).await
    }

    /// Best-effort metadata enrichment.
    ///
    /// For the schema.org context, resolves the document's type and adds
    /// `@context`, `@type` and `@id` properties. Existing keys are kept
    /// as they are. Any other context, an untyped document, or a failed
    /// lookup returns the document unchanged.
    pub async fn enrich(&self, document: &LinkedDocument, context: &str) -> LinkedDocument {
        match Vocabulary::from_context(context) {
            Some(Vocabulary::SchemaOrg) => {}
            Some(vocabulary) => {
                tracing::debug!(%vocabulary, "no enrichment available for vocabulary");
                return document.clone();
            }
            None => {
                tracing::debug!(context, "unrecognized enrichment context");
                return document.clone();
            }
        }

        let Some(type_uri) = document.declared_type() else {
            tracing::debug!("document has no type; skipping enrichment");
            return document.clone();
        };

        match self.definition(type_uri).await {
            Ok(definition) => enriched(document, type_uri, &definition),
            Err(e) => {
                tracing::warn!(type_uri, error = %e, "schema.org enrichment failed");
                document.clone()
            }
        }
    }

    async fn validate_schema_org(&self, type_uri: &str, document: &LinkedDocument) -> ValidationResult {
        let Some(type_name) = local_type_name(type_uri) else {
            return ValidationIssue::InvalidTypeUri.into();
        };

        let definition = match self.source.fetch_definition(&type_name).await {
            Ok(definition) => definition,
            Err(e) => return issue_for(e).into(),
        };

        let issues = definition.check(&document.properties);
        tracing::debug!(
            type_name = %type_name,
            source = self.source.name(),
            declared = definition.properties.len(),
            issues = issues.len(),
            "validated document against schema.org type"
        );
        ValidationResult::from_issues(issues)
    }
}

fn issue_for(err: SchemaError) -> ValidationIssue {
    if let Some(reason) = err.fetch_reason() {
        return ValidationIssue::DefinitionFetchFailed {
            vocabulary: Vocabulary::SchemaOrg,
            reason,
        };
    }
    match err {
        SchemaError::InvalidTypeUri(_) => ValidationIssue::InvalidTypeUri,
        other => ValidationIssue::UnknownFailure {
            message: other.to_string(),
        },
    }
}

fn enriched(document: &LinkedDocument, type_uri: &str, definition: &SchemaDefinition) -> LinkedDocument {
    let vocabulary = Vocabulary::SchemaOrg;
    let mut out = document.clone();
    for (key, value) in [
        (CONTEXT_KEY, vocabulary.context_uri()),
        (TYPE_KEY, definition.type_name.as_str()),
        (ID_KEY, type_uri),
    ] {
        out.properties
            .entry(key.to_string())
            .or_insert_with(|| PropertyValue::from(value));
    }
    if out.declared_context().is_none() {
        out.context = Some(vocabulary.context_uri().to_string());
    }
    out
}
