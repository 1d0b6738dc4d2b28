//! Plain-text report rendering.

use crate::audit::{ConsistencyReport, LineCount, Presence};
use crate::types::ScanResult;
use std::fmt::Write;

const BANNER_WIDTH: usize = 60;
const TABLE_WIDTH: usize = 55;

/// Everything one run produced, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Display title for the banner.
    pub title: String,
    /// Root file name, used in table headings.
    pub root_file: String,
    /// Section marker, used in table headings.
    pub section_marker: String,
    /// Progress lines for each scanned source.
    pub progress: Vec<String>,
    /// Path findings and checked count.
    pub result: ScanResult,
    /// Consistency audit.
    pub consistency: ConsistencyReport,
    /// Line-count audit.
    pub line_counts: Vec<LineCount>,
}

impl Report {
    /// Returns true if no errors were recorded.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.result.has_errors()
    }

    /// Process exit code: `0` when passed, `1` otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passed())
    }

    /// Renders the full text report.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_paths(&mut out);
        self.render_consistency(&mut out);
        self.render_line_counts(&mut out);

        let (errors, _) = self.result.count_by_severity();
        if errors == 0 {
            let _ = writeln!(out, "VALIDATION PASSED");
        } else {
            let _ = writeln!(out, "VALIDATION FAILED: {errors} error(s)");
        }
        out
    }

    fn render_paths(&self, out: &mut String) {
        banner(out, &format!("{} — Path Validation", self.title));
        for line in &self.progress {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Paths checked: {}", self.result.paths_checked);
        let _ = writeln!(out);

        let (errors, warnings) = self.result.count_by_severity();
        if errors > 0 {
            let _ = writeln!(out, "ERRORS ({errors}):");
            for finding in self.result.errors() {
                let _ = writeln!(out, "  ✗ {finding}");
            }
            let _ = writeln!(out);
        }
        if warnings > 0 {
            let _ = writeln!(out, "WARNINGS ({warnings}):");
            for finding in self.result.warnings() {
                let _ = writeln!(out, "  ? {finding}");
            }
            let _ = writeln!(out);
        }
        if errors == 0 && warnings == 0 {
            let _ = writeln!(out, "ALL PATHS VALID");
        }
        let _ = writeln!(out);
    }

    fn render_consistency(&self, out: &mut String) {
        banner(out, "Consistency Checks");

        let _ = writeln!(out, "Curated files referenced in {}:", self.root_file);
        presence_rows(out, &self.consistency.curated_in_root, "MISSING");
        let _ = writeln!(out);

        let _ = writeln!(out, "Index files referenced in {}:", self.root_file);
        presence_rows(out, &self.consistency.index_in_root, "MISSING");
        let _ = writeln!(out);

        let _ = writeln!(out, "{} sections in curated files:", self.section_marker);
        let missing = format!("MISSING {} section", self.section_marker);
        presence_rows(out, &self.consistency.sections, &missing);
        let _ = writeln!(out);
    }

    fn render_line_counts(&self, out: &mut String) {
        banner(out, "Line Count Audit");
        let _ = writeln!(out, "{:<35} {:>6} {:>10}", "File", "Lines", "Status");
        let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));
        for row in &self.line_counts {
            let _ = writeln!(out, "{:<35} {:>6} {:>10}", row.name, row.lines, row.status());
        }
        let _ = writeln!(out);
    }
}

fn banner(out: &mut String, heading: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);
}

fn presence_rows(out: &mut String, rows: &[Presence], missing: &str) {
    for row in rows {
        let (mark, status) = if row.found { ("✓", "ok") } else { ("✗", missing) };
        let _ = writeln!(out, "  {mark} {}: {status}", row.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Finding;

    fn presence(name: &str, found: bool) -> Presence {
        Presence {
            name: name.to_string(),
            found,
        }
    }

    fn report(result: ScanResult) -> Report {
        Report {
            title: "Test Skill v1".to_string(),
            root_file: "SKILL.md".to_string(),
            section_marker: "Go Deeper".to_string(),
            progress: vec![
                "Checking SKILL.md...".to_string(),
                "Checking references/*.md...".to_string(),
            ],
            result,
            consistency: ConsistencyReport {
                curated_in_root: vec![presence("guide.md", true)],
                index_in_root: vec![presence("list-index.md", false)],
                sections: vec![presence("guide.md", false)],
            },
            line_counts: vec![
                LineCount {
                    name: "SKILL.md".to_string(),
                    lines: 12,
                    max_lines: 500,
                },
                LineCount {
                    name: "guide.md".to_string(),
                    lines: 401,
                    max_lines: 400,
                },
            ],
        }
    }

    #[test]
    fn clean_report_layout() {
        let rendered = report(ScanResult {
            findings: Vec::new(),
            paths_checked: 3,
        })
        .render();

        let expected = "\
============================================================
Test Skill v1 — Path Validation
============================================================

Checking SKILL.md...
Checking references/*.md...

Paths checked: 3

ALL PATHS VALID

============================================================
Consistency Checks
============================================================

Curated files referenced in SKILL.md:
  ✓ guide.md: ok

Index files referenced in SKILL.md:
  ✗ list-index.md: MISSING

Go Deeper sections in curated files:
  ✗ guide.md: MISSING Go Deeper section

============================================================
Line Count Audit
============================================================

File                                 Lines     Status
-------------------------------------------------------
SKILL.md                                12         ok
guide.md                               401  OVER 400!

VALIDATION PASSED
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn findings_are_listed_by_severity() {
        let mut result = ScanResult::new();
        result.paths_checked = 2;
        result.push(Finding::warning("a.md: possibly broken path `docs/x.md`"));
        result.push(Finding::error("SKILL.md: broken path `docs/y.md`"));
        let report = report(result);
        let rendered = report.render();

        assert!(rendered.contains(
            "Paths checked: 2\n\nERRORS (1):\n  ✗ SKILL.md: broken path `docs/y.md`\n\n\
             WARNINGS (1):\n  ? a.md: possibly broken path `docs/x.md`\n\n\n"
        ));
        assert!(!rendered.contains("ALL PATHS VALID"));
        assert!(rendered.ends_with("VALIDATION FAILED: 1 error(s)\n"));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn warnings_alone_still_pass() {
        let mut result = ScanResult::new();
        result.push(Finding::warning("a.md: possibly broken path `docs/x.md`"));
        let report = report(result);

        assert!(report.passed());
        assert_eq!(report.exit_code(), 0);
        assert!(report.render().ends_with("VALIDATION PASSED\n"));
    }
}
