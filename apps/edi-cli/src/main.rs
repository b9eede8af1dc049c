//! # edi-cli
//!
//! Command-line front end for comparing X12 EDI files.
//!
//! - `edidiff compare` — segment-level diff of two files
//! - `edidiff stats` — diff tallies only
//! - `edidiff highlight` — classified elements of one file
//! - `edidiff inspect` — file type, delimiters and tag histogram
//! - `edidiff summary` — validation issues grouped by severity

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use edi_diff::DiffConfig;
use tracing_subscriber::EnvFilter;

/// Compare and inspect X12 EDI files segment by segment.
#[derive(Parser)]
#[command(name = "edidiff", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Config file (defaults to <project-root>/.edidiff/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two EDI files segment by segment.
    Compare(commands::compare::CompareArgs),
    /// Show diff statistics for two EDI files.
    Stats(commands::stats::StatsArgs),
    /// Print a file with element-level syntax highlighting.
    Highlight(commands::highlight::HighlightArgs),
    /// Describe the structure of an EDI file.
    Inspect(commands::inspect::InspectArgs),
    /// Group a validation report's issues by severity.
    Summary(commands::summary::SummaryArgs),
}

fn init_logging(verbose: bool, json: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("edi_segment={level}").parse()?)
        .add_directive(format!("edi_diff={level}").parse()?)
        .add_directive(format!("edidiff={level}").parse()?);

    // Logs go to stderr so they don't mix with rendered output on stdout.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json)?;

    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);
    let config = match &cli.config {
        Some(path) => DiffConfig::load(path),
        None => DiffConfig::for_project(&project_root),
    }
    .context("failed to load edidiff config")?;

    match &cli.command {
        Commands::Compare(args) => commands::compare::execute(args, &config),
        Commands::Stats(args) => commands::stats::execute(args, &config),
        Commands::Highlight(args) => commands::highlight::execute(args, &config),
        Commands::Inspect(args) => commands::inspect::execute(args, &config),
        Commands::Summary(args) => commands::summary::execute(args),
    }
}
