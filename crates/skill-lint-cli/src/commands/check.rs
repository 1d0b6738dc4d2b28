//! Check command implementation.

use anyhow::{Context, Result};
use skill_lint_core::Scanner;
use std::path::Path;

use crate::config_resolver::ConfigSource;

/// Runs the check command.
pub fn run(root: &Path, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;

    let scanner = Scanner::builder()
        .root(root)
        .config(config)
        .build()
        .context("Failed to build scanner")?;

    tracing::info!("Validating skill at {}", scanner.root().display());

    let report = scanner.scan().context("Scan failed")?;

    print!("{}", report.render());

    // Exit with error code if there are errors
    if !report.passed() {
        std::process::exit(report.exit_code());
    }

    Ok(())
}
