//! # mdxld-cli: CLI Tool for MDX-LD Documents
//!
//! Provides the `mdxld` command-line interface over `mdxld-core` and
//! `mdxld-schema`.
//!
//! ## Subcommands
//!
//! - `mdxld validate`: Check front-matter properties against schema.org types.
//! - `mdxld enrich`: Add `@context` / `@type` / `@id` metadata.
//! - `mdxld definition`: Print a resolved type definition.
//!
//! ```bash
//! mdxld validate posts/*.mdx
//! mdxld validate --type https://schema.org/Article --json draft.mdx
//! mdxld --strategy structured --base-url http://localhost:8080 definition https://schema.org/Article
//! ```

pub mod definition;
pub mod enrich;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use mdxld_core::{frontmatter, LinkedDocument};
use mdxld_schema::{LookupStrategy, SchemaOrgConfig};

/// Options controlling how type definitions are looked up.
#[derive(Args, Debug, Default)]
pub struct LookupArgs {
    /// Path to a YAML configuration file. Without it, `MDXLD_*`
    /// environment variables are read.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Definition lookup strategy (structured or scraped).
    #[arg(long, global = true)]
    pub strategy: Option<LookupStrategy>,

    /// Override the schema.org base URL.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

impl LookupArgs {
    /// Resolve the effective configuration. Flags win over the config
    /// file, which replaces the environment entirely.
    pub fn load(&self) -> Result<SchemaOrgConfig> {
        let mut config = match &self.config {
            Some(path) => SchemaOrgConfig::from_yaml_file(path)?,
            None => SchemaOrgConfig::from_env().context("invalid MDXLD_* environment")?,
        };
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url
                .parse()
                .with_context(|| format!("invalid --base-url: {base_url}"))?;
        }
        config.validate()?;
        tracing::debug!(
            base_url = %config.base_url,
            strategy = %config.strategy,
            timeout_secs = config.timeout_secs,
            "resolved lookup configuration"
        );
        Ok(config)
    }
}

/// Read and parse an MDX-LD file.
pub fn read_document(path: &Path) -> Result<LinkedDocument> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    frontmatter::parse(&source)
        .with_context(|| format!("failed to parse front matter in {}", path.display()))
}
