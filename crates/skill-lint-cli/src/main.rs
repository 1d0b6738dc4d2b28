//! skill-lint CLI tool.
//!
//! Usage:
//! ```bash
//! skill-lint [--root DIR] [--config FILE]
//! skill-lint list-expected
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Path and consistency validator for skill documentation bundles
#[derive(Parser)]
#[command(name = "skill-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skill root containing SKILL.md, references/ and docs/
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate paths and run the audits (default)
    Check,

    /// List the expected reference files and their ceilings
    ListExpected,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = config_resolver::resolve(&cli.root, cli.config.as_deref());

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => commands::check::run(&cli.root, &source),
        Commands::ListExpected => commands::list_expected::run(&source),
    }
}
