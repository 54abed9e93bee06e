//! Schema Outline CLI
//!
//! Prints structural outlines of lowered JSON schemas, one per input file or
//! one per collection with `--collections`.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use schema_outline::{
    collect_schema_files, load_document, render, render_outlines, CollectionSet, OutlineConfig,
    OutputFormat, Walker,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-outline")]
#[command(about = "Print structural outlines of lowered JSON schemas")]
struct Cli {
    /// Schema files or directories (walked for *.json)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Config file layered over outline.toml and SCHEMA_OUTLINE__* variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Treat each document as an object mapping collection names to schemas
    #[arg(long)]
    collections: bool,

    /// Maximum nesting depth (overrides config)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Hide description annotations in text output
    #[arg(long)]
    no_descriptions: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Compact,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Compact => OutputFormat::Compact,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `false` if any document could not be outlined
fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = OutlineConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    if let Some(format) = cli.format {
        config.render.format = format.into();
    }
    if let Some(max_depth) = cli.max_depth {
        config.walker.max_depth = max_depth;
    }
    if cli.no_descriptions {
        config.render.show_descriptions = false;
    }

    let walker = Walker::new(&config.walker);

    let mut files = Vec::new();
    for path in &cli.paths {
        let found = collect_schema_files(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        files.extend(found);
    }

    let show_headers = files.len() > 1 && config.render.format == OutputFormat::Text;
    let mut all_ok = true;

    for file in &files {
        match outline_file(file, &walker, &config, cli.collections) {
            Ok(output) => {
                if show_headers {
                    println!("==> {} <==", file.display());
                }
                println!("{}", output);
            }
            Err(e) => {
                tracing::warn!(file = %file.display(), "outline failed");
                eprintln!("{}: {:#}", file.display(), e);
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

fn outline_file(
    file: &Path,
    walker: &Walker,
    config: &OutlineConfig,
    collections: bool,
) -> anyhow::Result<String> {
    if !collections {
        let document = load_document(file).context("failed to load schema document")?;
        let description = walker.describe(&document)?;
        return Ok(render(&description, &config.render)?);
    }

    let set = CollectionSet::from_path(file).context("failed to load collection set")?;
    if set.is_empty() {
        tracing::warn!(file = %file.display(), "collection set declares no collections");
    }

    let outlines = set.outline(walker)?;
    match config.render.format {
        OutputFormat::Text => Ok(render_outlines(&outlines, &config.render)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&outlines)?),
        OutputFormat::Compact => Ok(serde_json::to_string(&outlines)?),
    }
}
