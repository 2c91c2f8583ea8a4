//! # mdxld CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdxld_cli::definition::{run_definition, DefinitionArgs};
use mdxld_cli::enrich::{run_enrich, EnrichArgs};
use mdxld_cli::validate::{run_validate, ValidateArgs};
use mdxld_cli::LookupArgs;
use mdxld_schema::SchemaTypeValidator;

/// MDX-LD toolkit
///
/// Validates MDX-LD front matter against schema.org type definitions and
/// enriches documents with JSON-LD metadata.
#[derive(Parser, Debug)]
#[command(name = "mdxld", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    lookup: LookupArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate documents against their schema.org type.
    Validate(ValidateArgs),

    /// Add @context, @type and @id metadata to a document.
    Enrich(EnrichArgs),

    /// Print the resolved definition of a type URI.
    Definition(DefinitionArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "mdxld starting");

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = cli.lookup.load()?;
    let validator = SchemaTypeValidator::from_config(&config)?;

    match &cli.command {
        Commands::Validate(args) => run_validate(args, &validator).await,
        Commands::Enrich(args) => run_enrich(args, &validator).await,
        Commands::Definition(args) => run_definition(args, &validator).await,
    }
}
