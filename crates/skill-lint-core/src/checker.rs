//! Existence checks for extracted path references.

use crate::types::{Finding, PathRef, ScanResult};
use std::path::PathBuf;
use tracing::debug;

/// Resolves path references against the skill root.
#[derive(Debug, Clone)]
pub struct PathChecker {
    root: PathBuf,
}

impl PathChecker {
    /// Creates a checker rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns true if the referenced path exists under the root.
    #[must_use]
    pub fn exists(&self, path_ref: &PathRef) -> bool {
        self.root.join(&path_ref.path).exists()
    }

    /// Checks one reference, returning the finding for a missing target.
    #[must_use]
    pub fn check(&self, source: &str, path_ref: &PathRef) -> Option<Finding> {
        if self.exists(path_ref) {
            return None;
        }
        debug!("{source}: missing {} target {}", path_ref.kind, path_ref.path);
        Some(Finding::missing_target(source, path_ref))
    }

    /// Checks every reference found in one source document.
    ///
    /// Every reference counts as checked, whether or not it resolves.
    #[must_use]
    pub fn check_all(&self, source: &str, refs: &[PathRef]) -> ScanResult {
        let mut result = ScanResult::new();
        for path_ref in refs {
            result.paths_checked += 1;
            if let Some(finding) = self.check(source, path_ref) {
                result.push(finding);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PatternKind, Severity};
    use std::fs;
    use tempfile::TempDir;

    fn skill_root() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("docs/API")).unwrap();
        fs::write(tmp.path().join("docs/API/File.md"), "# File\n").unwrap();
        fs::create_dir_all(tmp.path().join("references")).unwrap();
        fs::write(tmp.path().join("references/guide.md"), "# Guide\n").unwrap();
        tmp
    }

    #[test]
    fn existing_targets_produce_nothing() {
        let tmp = skill_root();
        let checker = PathChecker::new(tmp.path());
        let refs = [
            PathRef::new(PatternKind::BacktickFile, "docs/API/File.md"),
            PathRef::new(PatternKind::BacktickDirectory, "docs/API/"),
            PathRef::new(PatternKind::ReferenceLink, "references/guide.md"),
            PathRef::new(PatternKind::BareMention, "docs/API/File.md"),
        ];

        let result = checker.check_all("SKILL.md", &refs);
        assert!(result.findings.is_empty());
        assert_eq!(result.paths_checked, 4);
    }

    #[test]
    fn missing_strict_target_is_one_error() {
        let tmp = skill_root();
        let checker = PathChecker::new(tmp.path());
        let refs = [PathRef::new(PatternKind::BacktickFile, "docs/API/Gone.md")];

        let result = checker.check_all("SKILL.md", &refs);
        assert_eq!(result.paths_checked, 1);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].severity, Severity::Error);
        assert_eq!(
            result.findings[0].message,
            "SKILL.md: broken path `docs/API/Gone.md`"
        );
    }

    #[test]
    fn missing_bare_mention_is_warning() {
        let tmp = skill_root();
        let checker = PathChecker::new(tmp.path());
        let refs = [PathRef::new(PatternKind::BareMention, "docs/x/y.md")];

        let result = checker.check_all("guide.md", &refs);
        assert!(!result.has_errors());
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn file_is_not_a_directory() {
        let tmp = skill_root();
        fs::write(tmp.path().join("docs/Plain"), "not a dir").unwrap();
        let checker = PathChecker::new(tmp.path());
        let dir = PathRef::new(PatternKind::BacktickDirectory, "docs/Plain/");

        assert!(checker.check("SKILL.md", &dir).is_some());
    }

    #[test]
    fn duplicates_are_counted_each_time() {
        let tmp = skill_root();
        let checker = PathChecker::new(tmp.path());
        let r = PathRef::new(PatternKind::BacktickFile, "docs/API/Gone.md");

        let result = checker.check_all("SKILL.md", &[r.clone(), r]);
        assert_eq!(result.paths_checked, 2);
        assert_eq!(result.errors().count(), 2);
    }
}
