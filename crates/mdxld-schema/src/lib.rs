//! # mdxld-schema: schema.org Type Validation
//!
//! Checks MDX-LD front-matter properties against the property table of a
//! schema.org type, and enriches documents with JSON-LD metadata.
//!
//! ## Validation (`validator`)
//!
//! [`SchemaTypeValidator`] is the entry point:
//!
//! - [`SchemaTypeValidator::validate_type`]: validates a document against
//!   an explicit type URI such as `https://schema.org/Article`.
//! - [`SchemaTypeValidator::validate_context`]: dispatches on the
//!   document's own `$context`.
//! - [`SchemaTypeValidator::enrich`]: best-effort `@context` / `@type` /
//!   `@id` injection that never fails.
//!
//! ## Definition Lookup (`source`)
//!
//! Type definitions come from a [`SchemaDefinitionSource`]. Two HTTP
//! sources exist, selected by [`LookupStrategy`]:
//!
//! - [`StructuredSource`] reads a JSON definition document.
//! - [`ScrapedSource`] extracts the definition table from the type's HTML
//!   page.
//!
//! ## Crate Policy
//!
//! - Depends only on `mdxld-core` internally.
//! - One HTTP GET per lookup. No caching and no retries.
//! - Validation never returns `Err`; failures are reported as issues.
//! - `expect()` appears only on compile-time constants: the scraping
//!   patterns and the default base URL. Unit tests force each one.

pub mod config;
pub mod definition;
pub mod error;
pub mod scraped;
pub mod source;
pub mod structured;
pub mod validator;

pub use config::{ConfigError, LookupStrategy, SchemaOrgConfig};
pub use definition::SchemaDefinition;
pub use error::SchemaError;
pub use scraped::{extract_definition, ScrapedSource};
pub use source::{build_source, SchemaDefinitionSource};
pub use structured::{parse_definition, StructuredSource};
pub use validator::SchemaTypeValidator;
