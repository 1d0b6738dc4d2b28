//! # skill-lint-core
//!
//! Consistency checks for skill documentation bundles: a root `SKILL.md`,
//! a `references/` directory of markdown files and a `docs/` tree they point
//! into.
//!
//! A scan runs four stages in order:
//!
//! - path extraction ([`extract_paths`]) over the raw text of each document
//! - existence checks ([`PathChecker`]) producing [`Finding`]s
//! - the consistency audit ([`audit_consistency`])
//! - the line-count audit ([`audit_line_counts`])
//!
//! ## Example
//!
//! ```ignore
//! use skill_lint_core::Scanner;
//!
//! let scanner = Scanner::builder().root("./my-skill").build()?;
//! let report = scanner.scan()?;
//! print!("{}", report.render());
//! std::process::exit(report.exit_code());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audit;
mod checker;
mod config;
mod document;
mod extract;
mod report;
mod scanner;
mod types;

pub use audit::{audit_consistency, audit_line_counts, ConsistencyReport, LineCount, Presence};
pub use checker::PathChecker;
pub use config::{
    Config, ConfigError, ReferenceEntry, ReferenceRole, DEFAULT_CURATED_MAX_LINES,
    DEFAULT_ROOT_MAX_LINES,
};
pub use document::{line_count, Document};
pub use extract::{extract_kind, extract_paths};
pub use report::Report;
pub use scanner::{ScanError, Scanner, ScannerBuilder};
pub use types::{Finding, PathRef, PatternKind, ScanResult, Severity};
