//! Core types for diagnostics and analysis results.

use miette::SourceSpan;
use serde::{Deserialize, Serialize};

use crate::tree::{Span, SyntaxNode};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory finding that should be addressed.
    Warning,
    /// Finding that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in the file.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Resolves a span against a node's tree.
    #[must_use]
    pub fn of_span(node: SyntaxNode<'_>, span: Span) -> Self {
        let (line, column) = node.tree().line_col(span.start);
        Self {
            line,
            column,
            offset: span.start,
            length: span.len,
        }
    }

    /// The location of a node's full span.
    #[must_use]
    pub fn of_node(node: SyntaxNode<'_>) -> Self {
        Self::of_span(node, node.span())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A secondary location contributing to a diagnostic, carrying the matched
/// text (e.g. each self-reference inside one property).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Location of the label.
    pub location: Location,
    /// Matched text or message for this label.
    pub message: String,
}

impl Label {
    /// Creates a new label.
    #[must_use]
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// A rule violation found during analysis.
///
/// Immutable once reported. The primary location always falls within the
/// span of the node that triggered the rule; labels are ordered in document
/// order of the contributing matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable rule code (e.g. "NAM0007").
    pub code: String,
    /// Rule name (e.g. "class-naming").
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Primary location.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Additional related locations, in document order.
    pub labels: Vec<Label>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            labels: Vec::new(),
        }
    }

    /// Adds a secondary location.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Adds secondary locations in order.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels.extend(labels);
        self
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}\n",
            self.code, self.rule, self.location.line, self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        for label in &self.labels {
            let _ = writeln!(
                output,
                "  = related: `{}` at {}:{}",
                label.message, label.location.line, label.location.column
            );
        }
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.location.line, self.location.column, self.severity, self.code, self.message
        )
    }
}

/// An internal engine fault: a rule implementation failed on a node.
///
/// Distinct from user-facing diagnostics; analysis of sibling nodes and
/// other rules continues past a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// Name of the rule that failed.
    pub rule: String,
    /// Failure message.
    pub message: String,
}

/// Result of analyzing one or more syntax trees.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// All diagnostics, in report order.
    pub diagnostics: Vec<Diagnostic>,
    /// Engine faults recorded during analysis.
    pub faults: Vec<Fault>,
    /// Whether the run was abandoned by a cancellation signal. Diagnostics
    /// reported before cancellation remain valid.
    pub cancelled: bool,
}

impl AnalysisResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any error-severity diagnostics.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns true if there are any diagnostics at all.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity >= Severity::Warning)
    }

    /// Returns diagnostics filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    /// Counts diagnostics by severity as (errors, warnings).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warnings = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        (errors, warnings)
    }

    /// Merges diagnostics and faults from another result (e.g. another
    /// file's analysis).
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.faults.extend(other.faults);
        self.cancelled |= other.cancelled;
    }

    /// Formats a human-readable multi-line report.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(report, "{}", diagnostic.format());
        }
        let (errors, warnings) = self.count_by_severity();
        let _ = write!(report, "Found {errors} error(s), {warnings} warning(s)");
        if !self.faults.is_empty() {
            let _ = write!(report, "; {} engine fault(s)", self.faults.len());
        }
        report
    }
}

/// Converts a [`Diagnostic`] to a miette diagnostic for rich display.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
    #[related]
    related: Vec<RelatedSpan>,
}

/// A related span inside a [`DiagnosticReport`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct RelatedSpan {
    message: String,
    #[label]
    span: SourceSpan,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(d: &Diagnostic) -> Self {
        Self {
            message: format!("[{}] {}", d.code, d.message),
            span: SourceSpan::from((d.location.offset, d.location.length)),
            label_message: d.rule.clone(),
            related: d
                .labels
                .iter()
                .map(|l| RelatedSpan {
                    message: l.message.clone(),
                    span: SourceSpan::from((l.location.offset, l.location.length)),
                })
                .collect(),
        }
    }
}
