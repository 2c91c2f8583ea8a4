//! # Vocabularies
//!
//! A vocabulary is the namespace a document's `$type` belongs to. Three
//! namespaces are recognized; only schema.org has a validator, the other
//! two are recognized so that they fail with an explicit "not implemented"
//! issue instead of "unsupported".

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// A recognized vocabulary namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vocabulary {
    /// `https://schema.org`
    SchemaOrg,
    /// `https://gs1.org`
    Gs1,
    /// `https://mdx.org.ai`
    MdxOrgAi,
}

impl Vocabulary {
    /// All recognized vocabularies.
    pub const ALL: [Vocabulary; 3] = [Vocabulary::SchemaOrg, Vocabulary::Gs1, Vocabulary::MdxOrgAi];

    /// The context URI, without a trailing slash.
    pub fn context_uri(self) -> &'static str {
        match self {
            Self::SchemaOrg => "https://schema.org",
            Self::Gs1 => "https://gs1.org",
            Self::MdxOrgAi => "https://mdx.org.ai",
        }
    }

    /// Human-facing name used in messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::SchemaOrg => "schema.org",
            Self::Gs1 => "GS1",
            Self::MdxOrgAi => "MDX.org.ai",
        }
    }

    /// Identify the vocabulary of a type URI by its `<context>/` prefix.
    pub fn from_type_uri(type_uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| {
            type_uri
                .strip_prefix(v.context_uri())
                .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Identify the vocabulary of a context value.
    ///
    /// The bare context URI matches with or without a trailing slash, as does
    /// any URI underneath it (`https://schema.org/Article`).
    pub fn from_context(context: &str) -> Option<Self> {
        let context = context.trim();
        Self::ALL.into_iter().find(|v| {
            context
                .strip_prefix(v.context_uri())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.context_uri())
    }
}

/// Extract the local type name (final path segment) of a type URI.
///
/// Returns `None` when the URI is malformed or its final segment is empty
/// (`https://schema.org/`).
pub fn local_type_name(type_uri: &str) -> Option<String> {
    let url = Url::parse(type_uri.trim()).ok()?;
    url.path_segments()?
        .last()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
