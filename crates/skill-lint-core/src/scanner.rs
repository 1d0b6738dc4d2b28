//! Scanner that runs every stage over a skill tree.

use crate::audit::{audit_consistency, audit_line_counts};
use crate::checker::PathChecker;
use crate::config::Config;
use crate::document::Document;
use crate::extract::extract_paths;
use crate::report::Report;
use crate::types::{Finding, ScanResult};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that stop a scan from running at all.
///
/// Unreadable documents are not errors here; they become findings.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error resolving the skill root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference directory produced an invalid glob pattern.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring a [`Scanner`].
#[derive(Default)]
pub struct ScannerBuilder {
    root: Option<PathBuf>,
    config: Option<Config>,
}

impl ScannerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the skill root directory.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the scanner.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the current
    /// directory cannot be resolved for a relative root.
    pub fn build(self) -> Result<Scanner, ScanError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        Ok(Scanner {
            checker: PathChecker::new(&root),
            root,
            config,
        })
    }
}

/// Runs path extraction, existence checks and audits over one skill tree.
///
/// Use [`Scanner::builder()`] to construct an instance.
pub struct Scanner {
    root: PathBuf,
    config: Config,
    checker: PathChecker,
}

impl Scanner {
    /// Creates a new builder for configuring a scanner.
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// Returns the skill root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans the root file and every reference file, then runs the audits.
    ///
    /// # Errors
    ///
    /// Returns an error only if the reference directory cannot be turned into
    /// a glob pattern. Missing or unreadable documents become findings.
    pub fn scan(&self) -> Result<Report, ScanError> {
        info!("Starting scan at {}", self.root.display());

        let mut result = ScanResult::new();
        let mut progress = Vec::new();

        let root_path = self.root.join(&self.config.root_file);
        let root_doc = if root_path.exists() {
            progress.push(format!("Checking {}...", self.config.root_file));
            let (doc, found) = self.scan_document(&root_path);
            result.extend(found);
            doc
        } else {
            result.push(Finding::error(format!(
                "{} not found!",
                self.config.root_file
            )));
            None
        };

        progress.push(format!(
            "Checking {}/*.md...",
            self.config.references_dir.display()
        ));
        let (paths, discovery) = self.discover_references()?;
        result.extend(discovery);

        let mut references = Vec::with_capacity(paths.len());
        for path in &paths {
            let (doc, found) = self.scan_document(path);
            result.extend(found);
            references.extend(doc);
        }

        let root_text = root_doc.as_ref().map_or("", |d| d.content.as_str());
        let consistency = audit_consistency(&self.config, root_text, &references);
        let line_counts = audit_line_counts(&self.config, root_text, &references);

        let (errors, warnings) = result.count_by_severity();
        info!(
            "Scan complete: {} paths checked, {} error(s), {} warning(s)",
            result.paths_checked, errors, warnings
        );

        Ok(Report {
            title: self.config.title.clone(),
            root_file: self.config.root_file.clone(),
            section_marker: self.config.section_marker.clone(),
            progress,
            result,
            consistency,
            line_counts,
        })
    }

    /// Reads one document and checks every path it references.
    ///
    /// An unreadable document yields a single error and no document.
    fn scan_document(&self, path: &Path) -> (Option<Document>, ScanResult) {
        debug!("Scanning: {}", path.display());

        match Document::load(path) {
            Ok(doc) => {
                let refs = extract_paths(&doc.content);
                let result = self.checker.check_all(&doc.name, &refs);
                debug!(
                    "{}: {} reference(s), {} finding(s)",
                    doc.name,
                    refs.len(),
                    result.findings.len()
                );
                (Some(doc), result)
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                let mut result = ScanResult::new();
                result.push(Finding::error(format!(
                    "Cannot read {}: {e}",
                    path.display()
                )));
                (None, result)
            }
        }
    }

    /// Lists `*.md` files directly inside the reference directory, sorted by
    /// file name. Entries that cannot be inspected become error findings.
    fn discover_references(&self) -> Result<(Vec<PathBuf>, ScanResult), ScanError> {
        let dir = self.root.join(&self.config.references_dir);
        let pattern = format!("{}/*.md", glob::Pattern::escape(&dir.to_string_lossy()));

        let mut files = Vec::new();
        let mut result = ScanResult::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => {
                    warn!("Failed to inspect {}: {}", e.path().display(), e.error());
                    result.push(Finding::error(format!(
                        "Cannot read {}: {}",
                        e.path().display(),
                        e.error()
                    )));
                }
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!("Found {} reference file(s) in {}", files.len(), dir.display());
        Ok((files, result))
    }
}
