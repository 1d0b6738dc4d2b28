//! Path reference extraction.
//!
//! Each [`PatternKind`] has its own matcher over the raw document text. No
//! markdown structure is parsed: a reference inside a fenced code block is
//! still a reference.

use crate::types::{PathRef, PatternKind};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static BACKTICK_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(docs/[^`]+\.md)`").expect("valid regex"));

#[allow(clippy::expect_used)]
static BACKTICK_DIRECTORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(docs/[\w\-]+/)`").expect("valid regex"));

#[allow(clippy::expect_used)]
static REFERENCE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\((references/[\w\-]+\.md)\)").expect("valid regex"));

// `^` is start of text here, not start of line. Intentionally loose.
#[allow(clippy::expect_used)]
static BARE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(docs/[\w\-/]+\.md)").expect("valid regex"));

/// Placeholder marker for parametric example paths like `docs/API/{name}.md`.
const PLACEHOLDER: char = '{';

impl PatternKind {
    fn regex(self) -> &'static Regex {
        match self {
            Self::BacktickFile => &*BACKTICK_FILE,
            Self::BacktickDirectory => &*BACKTICK_DIRECTORY,
            Self::ReferenceLink => &*REFERENCE_LINK,
            Self::BareMention => &*BARE_MENTION,
        }
    }

    fn skips_placeholders(self) -> bool {
        matches!(self, Self::BacktickFile | Self::BacktickDirectory)
    }
}

/// Extracts every candidate of one pattern kind, in discovery order.
#[must_use]
pub fn extract_kind(content: &str, kind: PatternKind) -> Vec<PathRef> {
    kind.regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|path| !(kind.skips_placeholders() && path.contains(PLACEHOLDER)))
        .map(|path| PathRef::new(kind, path))
        .collect()
}

/// Extracts all path references from a document.
///
/// Results are grouped by kind in [`PatternKind::ALL`] order; within a kind
/// they keep discovery order. The same literal path may appear once per kind
/// that matches it.
#[must_use]
pub fn extract_paths(content: &str) -> Vec<PathRef> {
    PatternKind::ALL
        .into_iter()
        .flat_map(|kind| extract_kind(content, kind))
        .collect()
}
