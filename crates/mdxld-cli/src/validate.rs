//! # Validate: Check documents against their schema.org type.
//!
//! ## Usage
//!
//! ```bash
//! # Validate against each document's own $type:
//! mdxld validate posts/hello.mdx posts/world.mdx
//!
//! # Force a type and emit machine-readable results:
//! mdxld validate --type https://schema.org/Article --json draft.mdx
//! ```
//!
//! The type is taken from `--type`, then from the document's `$type`. A
//! document with neither but with a `$context` is validated by context.
//! Exit code is 1 when any document is invalid.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use mdxld_core::{LinkedDocument, ValidationResult};
use mdxld_schema::SchemaTypeValidator;

use crate::read_document;

/// Validate subcommand arguments.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// MDX-LD files to validate.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Validate against this type URI instead of each document's `$type`.
    #[arg(long = "type", value_name = "URI")]
    pub type_uri: Option<String>,

    /// Print results as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// One file's outcome, as printed with `--json`.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    result: ValidationResult,
}

/// Execute the validate subcommand.
pub async fn run_validate(args: &ValidateArgs, validator: &SchemaTypeValidator) -> Result<u8> {
    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let document = read_document(path)?;
        let result = validate_document(validator, &document, args.type_uri.as_deref()).await;
        tracing::info!(file = %path.display(), valid = result.is_valid, "validated");
        reports.push(FileReport {
            file: path.display().to_string(),
            result,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            if report.result.is_valid {
                println!("{}: OK", report.file);
            } else {
                println!("{}: INVALID", report.file);
                for error in &report.result.errors {
                    println!("  - {error}");
                }
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.result.is_valid).count();
    Ok(if invalid == 0 { 0 } else { 1 })
}

/// Validate one document, choosing between type and context dispatch.
pub async fn validate_document(
    validator: &SchemaTypeValidator,
    document: &LinkedDocument,
    type_override: Option<&str>,
) -> ValidationResult {
    match type_override.or_else(|| document.declared_type()) {
        Some(type_uri) => validator.validate_type(type_uri, document).await,
        None if document.declared_context().is_some() => validator.validate_context(document).await,
        None => validator.validate_type("", document).await,
    }
}
