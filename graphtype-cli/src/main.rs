//! Command-line front end for Graphtype.
//!
//! Reads an SDL schema file and writes the generated TypeScript
//! declarations to a file or stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graphtype_codegen::Generator;
use graphtype_schema::{ScalarMap, parse_document};

/// Generate TypeScript type declarations from a GraphQL SDL schema.
#[derive(Debug, Parser)]
#[command(name = "graphtype", version, about)]
struct Cli {
    /// Path to the SDL schema file.
    schema: PathBuf,

    /// Output path for the generated declarations (stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Additional scalar mapping, e.g. `DateTime=string`. Repeatable.
    #[arg(long = "scalar", value_name = "NAME=TYPE", value_parser = parse_scalar_mapping)]
    scalars: Vec<(String, String)>,

    /// Scalar name whose definition defers to a hand-written type. Repeatable.
    #[arg(long = "opaque", value_name = "NAME")]
    opaque: Vec<String>,
}

fn parse_scalar_mapping(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, ts_type)| (name.to_string(), ts_type.to_string()))
        .ok_or_else(|| format!("expected NAME=TYPE, got '{raw}'"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut scalars = ScalarMap::new();
    for (name, ts_type) in &cli.scalars {
        scalars = scalars.with_scalar(name, ts_type);
    }
    for name in &cli.opaque {
        scalars = scalars.with_opaque(name);
    }

    let sdl = fs::read_to_string(&cli.schema)
        .with_context(|| format!("reading schema {}", cli.schema.display()))?;
    let document =
        parse_document(&sdl).with_context(|| format!("parsing schema {}", cli.schema.display()))?;
    let declarations = Generator::with_scalars(&document, scalars).generate();

    match &cli.output {
        Some(path) => fs::write(path, &declarations)
            .with_context(|| format!("writing declarations to {}", path.display()))?,
        None => println!("{declarations}"),
    }

    Ok(())
}
