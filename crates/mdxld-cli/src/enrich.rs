//! # Enrich: Add JSON-LD metadata to a document.
//!
//! ```bash
//! mdxld enrich post.mdx --out post.enriched.mdx
//! mdxld enrich post.mdx --context https://schema.org
//! ```
//!
//! Enrichment is best-effort: a failed lookup leaves the document as it
//! was, and the command still succeeds.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mdxld_core::{frontmatter, Vocabulary};
use mdxld_schema::SchemaTypeValidator;

use crate::read_document;

/// Enrich subcommand arguments.
#[derive(Args, Debug)]
pub struct EnrichArgs {
    /// MDX-LD file to enrich.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Vocabulary context. Defaults to the document's `$context`, then schema.org.
    #[arg(long, value_name = "URI")]
    pub context: Option<String>,

    /// Write the enriched document here instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Execute the enrich subcommand.
pub async fn run_enrich(args: &EnrichArgs, validator: &SchemaTypeValidator) -> Result<u8> {
    let document = read_document(&args.file)?;
    let context = args
        .context
        .as_deref()
        .or_else(|| document.declared_context())
        .unwrap_or(Vocabulary::SchemaOrg.context_uri())
        .to_string();

    let enriched = validator.enrich(&document, &context).await;
    let rendered = frontmatter::render(&enriched).context("failed to render enriched document")?;

    match &args.out {
        Some(out) => {
            std::fs::write(out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(out = %out.display(), "wrote enriched document");
        }
        None => print!("{rendered}"),
    }
    Ok(0)
}
