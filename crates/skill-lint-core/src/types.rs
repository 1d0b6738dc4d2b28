//! Core types for path references, findings and scan results.

/// Severity level for a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Likely problem that needs a human to confirm. Never fails the run.
    Warning,
    /// Broken reference or unreadable document. Fails the run.
    Error,
}

/// The textual shape a path reference was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// `` `docs/Some/File.md` ``
    BacktickFile,
    /// `` `docs/Some/` ``
    BacktickDirectory,
    /// `[text](references/file.md)`
    ReferenceLink,
    /// `docs/some/file.md` preceded by whitespace, no backticks.
    BareMention,
}

impl PatternKind {
    /// All kinds, in the order they are scanned.
    pub const ALL: [Self; 4] = [
        Self::BacktickFile,
        Self::BacktickDirectory,
        Self::ReferenceLink,
        Self::BareMention,
    ];

    /// Returns true if a missing target for this kind is an error.
    #[must_use]
    pub fn is_strict(self) -> bool {
        !matches!(self, Self::BareMention)
    }

    /// Short label used in finding messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BacktickFile | Self::BareMention => "path",
            Self::BacktickDirectory => "directory",
            Self::ReferenceLink => "ref link",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BacktickFile => write!(f, "backtick-file"),
            Self::BacktickDirectory => write!(f, "backtick-directory"),
            Self::ReferenceLink => write!(f, "reference-link"),
            Self::BareMention => write!(f, "bare-mention"),
        }
    }
}

/// A candidate path extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathRef {
    /// Pattern that produced this candidate.
    pub kind: PatternKind,
    /// Path relative to the skill root, as written in the document.
    pub path: String,
}

impl PathRef {
    /// Creates a new path reference.
    #[must_use]
    pub fn new(kind: PatternKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// A single error or warning produced during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity of this finding.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Creates an error finding.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Creates a warning finding.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Builds the finding for a path reference whose target is missing.
    ///
    /// Strict kinds produce an error, bare mentions a warning.
    #[must_use]
    pub fn missing_target(source: &str, path_ref: &PathRef) -> Self {
        if path_ref.kind.is_strict() {
            Self::error(format!(
                "{source}: broken {} `{}`",
                path_ref.kind.label(),
                path_ref.path
            ))
        } else {
            Self::warning(format!(
                "{source}: possibly broken path `{}`",
                path_ref.path
            ))
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Findings and the raw checked-path count accumulated by a scan stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// All findings, in discovery order.
    pub findings: Vec<Finding>,
    /// Number of path references checked. Not deduplicated.
    pub paths_checked: usize,
}

impl ScanResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Returns the errors in discovery order.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    /// Returns the warnings in discovery order.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Counts findings as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self.errors().count();
        (errors, self.findings.len() - errors)
    }

    /// Appends findings and counts from another result.
    pub fn extend(&mut self, other: Self) {
        self.findings.extend(other.findings);
        self.paths_checked += other.paths_checked;
    }
}
