//! Core types for style violations and lint results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for style violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stylistic finding, does not fail lint.
    Low,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
///
/// The byte offset is the canonical locator; line and character are derived
/// from it through the owning document's line table. The character column
/// counts UTF-16 code units, matching how editors report columns for
/// multi-byte source text. Synthetic documents carry no file path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File the violation was found in, if any.
    pub file: Option<PathBuf>,
    /// Line number (1-indexed).
    pub line: usize,
    /// Character within the line (1-indexed, UTF-16 code units).
    pub character: Option<usize>,
    /// Raw byte offset into the file contents.
    pub offset: Option<usize>,
}

impl Location {
    /// Creates a location from an explicit line number, without offset
    /// information.
    #[must_use]
    pub fn from_line(file: Option<PathBuf>, line: usize) -> Self {
        Self {
            file,
            line,
            character: None,
            offset: None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}", file.display(), self.line)?,
            None => write!(f, "<nopath>:{}", self.line)?,
        }
        if let Some(character) = self.character {
            write!(f, ":{character}")?;
        }
        Ok(())
    }
}

/// Static metadata describing a rule.
///
/// The example snippets double as the rule's conformance suite: every
/// non-triggering example must produce zero violations carrying this
/// rule's identifier, and every triggering example at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescription {
    /// Stable kebab-case identifier, used by the exclusion pragma.
    pub identifier: &'static str,
    /// Display name.
    pub name: &'static str,
    /// What the rule checks.
    pub description: &'static str,
    /// Snippets that must not trigger this rule.
    pub non_triggering_examples: &'static [&'static str],
    /// Snippets that must each trigger this rule at least once.
    pub triggering_examples: &'static [&'static str],
}

/// A style violation found during linting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the rule that emitted this violation.
    pub identifier: String,
    /// Display name of the rule.
    pub name: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable explanation.
    pub reason: String,
}

impl Violation {
    /// Creates a violation from a rule's description.
    #[must_use]
    pub fn new(
        description: &RuleDescription,
        severity: Severity,
        location: Location,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            identifier: description.identifier.to_string(),
            name: description.name.to_string(),
            severity,
            location,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.identifier, self.reason
        )
    }
}

/// Converts a [`Violation`] to a miette diagnostic for rich display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(violation: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", violation.identifier, violation.reason),
            span: SourceSpan::from((violation.location.offset.unwrap_or(0), 0)),
            label: violation.name.clone(),
        }
    }
}

/// Result of linting a batch of documents.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of documents linted.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts violations by severity as `(errors, warnings, lows)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity: Severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Low),
        )
    }

    /// Checks whether any violation meets or exceeds `severity`.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: RuleDescription = RuleDescription {
        identifier: "test-rule",
        name: "Test Rule",
        description: "A test rule",
        non_triggering_examples: &[],
        triggering_examples: &[],
    };

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            &DESCRIPTION,
            severity,
            Location::from_line(Some(PathBuf::from("Foo.swift")), 3),
            "some reason",
        )
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Low < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn violation_equality_is_field_wise() {
        assert_eq!(make_violation(Severity::Low), make_violation(Severity::Low));
        assert_ne!(
            make_violation(Severity::Low),
            make_violation(Severity::Warning)
        );
    }

    #[test]
    fn violation_display_includes_identifier_and_line() {
        let display = make_violation(Severity::Warning).to_string();
        assert!(display.contains("Foo.swift:3"));
        assert!(display.contains("[test-rule]"));
    }

    #[test]
    fn location_without_file_displays_placeholder() {
        let location = Location::from_line(None, 1);
        assert_eq!(location.to_string(), "<nopath>:1");
    }

    #[test]
    fn lint_result_counts_by_severity() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Low));
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Warning));
        assert_eq!(result.count_by_severity(), (0, 2, 1));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
    }

    #[test]
    fn diagnostic_carries_identifier() {
        let violation = make_violation(Severity::Error);
        let diagnostic = ViolationDiagnostic::from(&violation);
        assert!(diagnostic.to_string().contains("[test-rule]"));
    }
}
