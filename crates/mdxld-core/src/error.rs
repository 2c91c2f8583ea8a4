//! # Error Types
//!
//! Errors raised while reading or writing MDX-LD documents. Validation
//! outcomes are not errors; they are carried by
//! [`ValidationResult`](crate::ValidationResult).

use thiserror::Error;

/// Error while parsing or rendering an MDX-LD document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The opening `---` fence was found but no closing fence followed.
    #[error("front matter starting at line 1 is not terminated by '---'")]
    UnterminatedFrontMatter,

    /// The front matter is not valid YAML.
    #[error("invalid YAML in front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The front matter parsed, but its root is not a mapping.
    #[error("front matter must be a YAML mapping, found {found}")]
    NotAMapping {
        /// YAML node kind found at the root.
        found: &'static str,
    },

    /// A reserved field (`$type`, `$context`) holds a non-string value.
    #[error("front matter field '{field}' must be a string")]
    InvalidField {
        /// Name of the offending field as written in the document.
        field: String,
    },
}
