//! Configuration types for skill-lint.
//!
//! Every field defaults to the built-in expectation table, so an absent or
//! empty configuration file behaves exactly like no configuration at all.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Default line ceiling for curated reference files.
pub const DEFAULT_CURATED_MAX_LINES: usize = 400;

/// Default line ceiling for the root file.
pub const DEFAULT_ROOT_MAX_LINES: usize = 500;

const BUILTIN_CURATED: &[&str] = &[
    "language-syntax.md",
    "data-types.md",
    "orda-modern.md",
    "query-patterns.md",
    "error-handling.md",
    "classic-patterns.md",
    "forms-and-ui.md",
    "web-and-rest.md",
    "manual-insights.md",
];

const BUILTIN_INDEX: &[&str] = &[
    "api-index.md",
    "commands-index.md",
    "concepts-index.md",
    "orda-index.md",
    "rest-index.md",
    "events-index.md",
    "form-objects-index.md",
    "webserver-index.md",
    "legacy-commands-index.md",
    "all-categories-index.md",
];

/// Top-level configuration for skill-lint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display title shown in the report banner.
    pub title: String,

    /// Root file name, relative to the skill root.
    pub root_file: String,

    /// Reference directory, relative to the skill root.
    pub references_dir: PathBuf,

    /// Line ceiling for the root file.
    pub root_max_lines: usize,

    /// Marker every curated file must contain (matched case-insensitively).
    pub section_marker: String,

    /// Expected reference files, in report order.
    pub references: Vec<ReferenceEntry>,
}

impl Default for Config {
    fn default() -> Self {
        let curated = BUILTIN_CURATED
            .iter()
            .map(|name| ReferenceEntry::new(*name, ReferenceRole::Curated));
        let index = BUILTIN_INDEX
            .iter()
            .map(|name| ReferenceEntry::new(*name, ReferenceRole::Index));

        Self {
            title: "4D Skill v21".to_string(),
            root_file: "SKILL.md".to_string(),
            references_dir: PathBuf::from("references"),
            root_max_lines: DEFAULT_ROOT_MAX_LINES,
            section_marker: "Go Deeper".to_string(),
            references: curated.chain(index).collect(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the reference table for empty or duplicate names and zero ceilings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_file.trim().is_empty() {
            return Err(ConfigError::invalid("root_file must not be empty"));
        }
        if self.section_marker.trim().is_empty() {
            return Err(ConfigError::invalid("section_marker must not be empty"));
        }
        if self.root_max_lines == 0 {
            return Err(ConfigError::invalid("root_max_lines must be positive"));
        }

        let mut seen = HashSet::new();
        for entry in &self.references {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::invalid("reference name must not be empty"));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate reference `{}`",
                    entry.name
                )));
            }
            if entry.max_lines == 0 {
                return Err(ConfigError::invalid(format!(
                    "max_lines for `{}` must be positive",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// Curated entries, in table order.
    pub fn curated(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.references.iter().filter(|e| e.is_curated())
    }

    /// Index entries, in table order.
    pub fn indexes(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.references.iter().filter(|e| !e.is_curated())
    }
}

/// Role of an expected reference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceRole {
    /// Narrative guide: must carry the section marker, has a line ceiling.
    Curated,
    /// Enumeration: only needs to be mentioned in the root file.
    Index,
}

/// One row of the expectation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// File name inside the reference directory.
    pub name: String,
    /// Role of the file.
    pub role: ReferenceRole,
    /// Line ceiling, audited for curated entries only.
    #[serde(default = "default_curated_max_lines")]
    pub max_lines: usize,
}

impl ReferenceEntry {
    /// Creates an entry with the default line ceiling.
    #[must_use]
    pub fn new(name: impl Into<String>, role: ReferenceRole) -> Self {
        Self {
            name: name.into(),
            role,
            max_lines: DEFAULT_CURATED_MAX_LINES,
        }
    }

    /// Overrides the line ceiling.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Returns true for curated entries.
    #[must_use]
    pub fn is_curated(&self) -> bool {
        self.role == ReferenceRole::Curated
    }
}

fn default_curated_max_lines() -> usize {
    DEFAULT_CURATED_MAX_LINES
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config parsed but is not usable.
    #[error("Invalid config: {message}")]
    Invalid {
        /// What is wrong.
        message: String,
    },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
