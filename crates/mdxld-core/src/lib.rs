//! # mdxld-core: Foundational Types for MDX-LD Documents
//!
//! MDX-LD documents are Markdown files whose YAML front matter carries
//! JSON-LD style `$type` / `$context` fields next to arbitrary structured
//! properties. This crate defines the types every other crate in the
//! workspace shares. It performs no I/O and no network access.
//!
//! ## Key Design Principles
//!
//! 1. **Tagged property values.** Front-matter values are held in the
//!    [`PropertyValue`] union rather than an untyped JSON tree, so the
//!    type-compatibility predicate [`matches`] is total and testable.
//!
//! 2. **Closed kind enumeration.** [`ValueKind`] covers the five primitive
//!    schema.org range kinds. Any other range token becomes
//!    [`ValueKind::Unknown`], which no value satisfies.
//!
//! 3. **Issues are data.** Validation failures are [`ValidationIssue`]
//!    values whose `Display` output is the exact user-facing message
//!    collected into a [`ValidationResult`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mdxld-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod frontmatter;
pub mod kind;
pub mod validation;
pub mod value;
pub mod vocabulary;

// Re-export primary types for ergonomic imports.
pub use document::LinkedDocument;
pub use error::DocumentError;
pub use kind::{matches, matches_any, ValueKind};
pub use validation::{ValidationIssue, ValidationResult};
pub use value::PropertyValue;
pub use vocabulary::{local_type_name, Vocabulary};
