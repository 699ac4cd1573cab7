//! Avro Code Generator CLI
//!
//! Compiles `.avsc` schemas into a Rust module with binary codecs.
//!
//! ```text
//! avrogen [-c CONFIG] [-o DIR] [-p PACKAGE] [--dry-run] <INPUTS>...
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use avrogen::avsc::{collect_schema_files, SchemaParser};
use avrogen::codegen::generate_files;
use avrogen::config::AvrogenConfig;
use avrogen::sink::{DirectorySink, Sink};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "avrogen")]
#[command(about = "Generate Rust types and binary codecs from Avro schemas")]
struct Cli {
    /// Config file (defaults to avrogen.toml and friends)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides [output] dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Package name (overrides [generate] package)
    #[arg(short, long)]
    package: Option<String>,

    /// Render and validate, but only list the files
    #[arg(long)]
    dry_run: bool,

    /// Schema files or directories containing *.avsc
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_ref().map(|p| p.to_string_lossy().into_owned());
    let mut config = AvrogenConfig::load_from(config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(output) = cli.output {
        config.output.dir = output;
    }
    if let Some(package) = cli.package {
        config.generate.package = package;
    }

    let files = collect_schema_files(&cli.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No .avsc schemas found in {:?}", cli.inputs);
    }

    let mut parser = SchemaParser::new()?;
    for file in &files {
        parser
            .parse_file(file)
            .with_context(|| format!("Failed to parse {}", file.display()))?;
    }
    let namespace = parser.into_namespace();

    let sources: Vec<String> = files.iter().map(|f| f.display().to_string()).collect();
    let output = generate_files(&namespace, &config.generate.package, &sources, config.generate.validate)
        .context("Code generation failed")?;
    info!(types = output.type_count, files = output.files.len(), "generated");

    println!("📦 avrogen");
    println!("  Package: {}", config.generate.package);
    println!("  Schemas: {}", files.len());
    println!("  Types:   {}", output.type_count);
    println!();

    if cli.dry_run {
        println!("🔍 Dry run - files that would be written:");
        for file in &output.files {
            println!("  {} ({} bytes)", file.name, file.contents.len());
        }
        return Ok(());
    }

    let mut sink = DirectorySink::new(config.output_dir());
    sink.write_all(&output.files)
        .with_context(|| format!("Failed to write package to {}", sink.root().display()))?;

    println!("✅ Wrote {} files to {}", output.files.len(), sink.root().display());
    Ok(())
}
