//! Consistency and line-count audits.
//!
//! Both audits are informational. Nothing here produces a [`Finding`] or
//! changes the exit status.
//!
//! [`Finding`]: crate::Finding

use crate::config::{Config, ReferenceEntry};
use crate::document::{line_count, Document};

/// Whether an expected name or marker was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
    /// Reference file name.
    pub name: String,
    /// Whether it was found.
    pub found: bool,
}

impl Presence {
    fn new(name: &str, found: bool) -> Self {
        Self {
            name: name.to_string(),
            found,
        }
    }
}

/// Result of the consistency audit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Curated file names mentioned in the root file.
    pub curated_in_root: Vec<Presence>,
    /// Index file names mentioned in the root file.
    pub index_in_root: Vec<Presence>,
    /// Section marker presence, for curated files that were loaded.
    pub sections: Vec<Presence>,
}

impl ConsistencyReport {
    /// Returns true if every check passed.
    #[must_use]
    pub fn all_found(&self) -> bool {
        self.curated_in_root
            .iter()
            .chain(&self.index_in_root)
            .chain(&self.sections)
            .all(|p| p.found)
    }
}

/// Checks that expected names appear in the root text and that curated
/// documents carry the section marker.
///
/// `root_text` is empty when the root file is missing. Curated files absent
/// from `references` are left out of the section table.
#[must_use]
pub fn audit_consistency(
    config: &Config,
    root_text: &str,
    references: &[Document],
) -> ConsistencyReport {
    let mentioned =
        |entry: &ReferenceEntry| Presence::new(&entry.name, root_text.contains(&entry.name));

    let marker = config.section_marker.to_lowercase();
    let sections = config
        .curated()
        .filter_map(|entry| find(references, &entry.name))
        .map(|doc| Presence::new(&doc.name, doc.content.to_lowercase().contains(&marker)))
        .collect();

    ConsistencyReport {
        curated_in_root: config.curated().map(mentioned).collect(),
        index_in_root: config.indexes().map(mentioned).collect(),
        sections,
    }
}

/// One row of the line-count audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCount {
    /// File name.
    pub name: String,
    /// Counted lines.
    pub lines: usize,
    /// Ceiling the count is compared against.
    pub max_lines: usize,
}

impl LineCount {
    /// Returns true if the file exceeds its ceiling.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.lines > self.max_lines
    }

    /// Status column text: `ok` or `OVER <ceiling>!`.
    #[must_use]
    pub fn status(&self) -> String {
        if self.is_over() {
            format!("OVER {}!", self.max_lines)
        } else {
            "ok".to_string()
        }
    }
}

/// Counts lines of the root file and each loaded curated file.
///
/// The root row is always present; a missing root counts as zero lines.
#[must_use]
pub fn audit_line_counts(
    config: &Config,
    root_text: &str,
    references: &[Document],
) -> Vec<LineCount> {
    let root = LineCount {
        name: config.root_file.clone(),
        lines: line_count(root_text),
        max_lines: config.root_max_lines,
    };

    let curated = config.curated().filter_map(|entry| {
        find(references, &entry.name).map(|doc| LineCount {
            name: entry.name.clone(),
            lines: doc.line_count(),
            max_lines: entry.max_lines,
        })
    });

    std::iter::once(root).chain(curated).collect()
}

fn find<'a>(documents: &'a [Document], name: &str) -> Option<&'a Document> {
    documents.iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReferenceEntry, ReferenceRole};

    fn config() -> Config {
        Config {
            references: vec![
                ReferenceEntry::new("data-types.md", ReferenceRole::Curated),
                ReferenceEntry::new("forms-and-ui.md", ReferenceRole::Curated),
                ReferenceEntry::new("api-index.md", ReferenceRole::Index),
            ],
            ..Config::default()
        }
    }

    fn doc(name: &str, content: &str) -> Document {
        Document::new(format!("/skill/references/{name}"), content)
    }

    fn lines(n: usize) -> String {
        "line\n".repeat(n)
    }

    #[test]
    fn names_are_matched_as_substrings_of_root() {
        let root = "Read [types](references/data-types.md) first.";
        let report = audit_consistency(&config(), root, &[]);

        assert_eq!(
            report.curated_in_root,
            [
                Presence::new("data-types.md", true),
                Presence::new("forms-and-ui.md", false),
            ]
        );
        assert_eq!(report.index_in_root, [Presence::new("api-index.md", false)]);
        assert!(!report.all_found());
    }

    #[test]
    fn missing_root_marks_everything_missing() {
        let report = audit_consistency(&config(), "", &[]);
        assert!(report.curated_in_root.iter().all(|p| !p.found));
        assert!(report.index_in_root.iter().all(|p| !p.found));
    }

    #[test]
    fn marker_match_ignores_case() {
        let refs = [
            doc("data-types.md", "## GO DEEPER\n- docs/x.md"),
            doc("forms-and-ui.md", "## Further reading"),
        ];
        let report = audit_consistency(&config(), "", &refs);
        assert_eq!(
            report.sections,
            [
                Presence::new("data-types.md", true),
                Presence::new("forms-and-ui.md", false),
            ]
        );
    }

    #[test]
    fn sections_skip_unloaded_and_index_files() {
        let refs = [
            doc("api-index.md", "no marker"),
            doc("forms-and-ui.md", "go deeper"),
        ];
        let report = audit_consistency(&config(), "", &refs);
        assert_eq!(report.sections, [Presence::new("forms-and-ui.md", true)]);
    }

    #[test]
    fn curated_ceiling_is_inclusive() {
        let refs = [
            doc("data-types.md", &lines(400)),
            doc("forms-and-ui.md", &lines(401)),
        ];
        let rows = audit_line_counts(&config(), "", &refs);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].name, "data-types.md");
        assert_eq!(rows[1].status(), "ok");
        assert_eq!(rows[2].lines, 401);
        assert_eq!(rows[2].status(), "OVER 400!");
    }

    #[test]
    fn root_row_is_always_first() {
        let rows = audit_line_counts(&config(), &lines(501), &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "SKILL.md");
        assert_eq!(rows[0].status(), "OVER 500!");

        let rows = audit_line_counts(&config(), "", &[]);
        assert_eq!(rows[0].lines, 0);
        assert_eq!(rows[0].status(), "ok");
    }

    #[test]
    fn index_files_are_not_line_audited() {
        let refs = [doc("api-index.md", &lines(9000))];
        let rows = audit_line_counts(&config(), "", &refs);
        assert_eq!(rows.len(), 1);
    }
}
