//! # Definition: Print a resolved schema.org type definition.
//!
//! ```bash
//! mdxld definition https://schema.org/Article
//! ```

use anyhow::{Context, Result};
use clap::Args;

use mdxld_schema::SchemaTypeValidator;

/// Definition subcommand arguments.
#[derive(Args, Debug)]
pub struct DefinitionArgs {
    /// Type URI, e.g. `https://schema.org/Article`.
    #[arg(value_name = "TYPE_URI")]
    pub type_uri: String,
}

/// Execute the definition subcommand.
pub async fn run_definition(args: &DefinitionArgs, validator: &SchemaTypeValidator) -> Result<u8> {
    let definition = validator
        .definition(&args.type_uri)
        .await
        .with_context(|| format!("failed to resolve definition of {}", args.type_uri))?;
    println!("{}", serde_json::to_string_pretty(&definition)?);
    Ok(0)
}
