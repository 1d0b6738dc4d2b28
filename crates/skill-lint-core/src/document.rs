//! Documents loaded from the skill tree.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// `\r\n` first so it counts as a single break.
#[allow(clippy::expect_used)]
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]").expect("valid regex")
});

/// A markdown file read once per run.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name, used as the source label in findings.
    pub name: String,
    /// Full path the document was read from.
    pub path: PathBuf,
    /// Raw text content.
    pub content: String,
}

impl Document {
    /// Creates a document from already loaded content.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        Self {
            name,
            path,
            content: content.into(),
        }
    }

    /// Reads a document from disk.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error if the file cannot be read as UTF-8.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(path, content))
    }

    /// Number of lines in the document.
    #[must_use]
    pub fn line_count(&self) -> usize {
        line_count(&self.content)
    }
}

/// Counts lines the way universal-newline text is split: `\n`, `\r`,
/// `\r\n`, form feed, vertical tab, the file/group/record separators, NEL
/// and the Unicode line and paragraph separators all end a line. A trailing
/// break does not start a new line and empty text has zero lines.
#[must_use]
pub fn line_count(text: &str) -> usize {
    let mut breaks = 0;
    let mut last_end = 0;
    for m in LINE_BREAK.find_iter(text) {
        breaks += 1;
        last_end = m.end();
    }
    breaks + usize::from(last_end < text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_file_name() {
        let doc = Document::new("/skill/references/guide.md", "");
        assert_eq!(doc.name, "guide.md");
    }

    #[test]
    fn line_count_excludes_trailing_newline() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("one\n"), 1);
        assert_eq!(line_count("one\ntwo\n"), 2);
        assert_eq!(line_count("one\r\ntwo"), 2);
        assert_eq!(line_count("\n\n"), 2);
    }

    #[test]
    fn line_count_splits_on_bare_carriage_return() {
        assert_eq!(line_count("a\rb\rc\r"), 3);
        assert_eq!(line_count("a\rb"), 2);
        assert_eq!(line_count("a\r\n\r\nb"), 3);
    }

    #[test]
    fn line_count_splits_on_unicode_separators() {
        assert_eq!(line_count("a\u{2028}b"), 2);
        assert_eq!(line_count("a\u{2029}b\u{85}c"), 3);
        assert_eq!(line_count("a\x0bb\x0cc\x1cd\x1de\x1ef"), 6);
        assert_eq!(line_count("tab\tis not a break"), 1);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Document::load(Path::new("/definitely/not/here.md")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
