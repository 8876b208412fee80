//! The rule abstraction.
//!
//! The catalog is fixed at build time, so rules form a closed sum
//! dispatched by `match` rather than trait objects. Evaluation is total:
//! every rule returns a violation list, possibly empty, never an error.

use crate::docs::DocumentationRule;
use crate::document::SourceDocument;
use crate::sweep::LineSweepRule;
use crate::types::{RuleDescription, Severity, Violation};
use regex::Regex;

/// Where a text-pattern rule applies its expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// One pass over the whole document text.
    WholeText,
    /// One pass per line, independently.
    PerLine,
}

/// A rule whose entire logic is a compiled regular expression.
///
/// Emits one violation per match, located at the match's byte offset.
#[derive(Debug, Clone)]
pub struct TextPatternRule {
    description: RuleDescription,
    regex: Regex,
    scope: MatchScope,
    severity: Severity,
    reason: &'static str,
}

impl TextPatternRule {
    /// Compiles a text rule.
    ///
    /// # Errors
    ///
    /// Returns the compilation error for an invalid pattern.
    pub fn new(
        description: RuleDescription,
        pattern: &str,
        scope: MatchScope,
        severity: Severity,
        reason: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            description,
            regex: Regex::new(pattern)?,
            scope,
            severity,
            reason,
        })
    }

    /// Static metadata for this rule.
    #[must_use]
    pub fn description(&self) -> &RuleDescription {
        &self.description
    }

    /// Runs the expression over one document.
    #[must_use]
    pub fn validate(&self, document: &SourceDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        match self.scope {
            MatchScope::WholeText => {
                for found in self.regex.find_iter(&document.contents) {
                    violations.push(Violation::new(
                        &self.description,
                        self.severity,
                        document.location(found.start()),
                        self.reason,
                    ));
                }
            }
            MatchScope::PerLine => {
                for line in &document.lines {
                    for found in self.regex.find_iter(&line.content) {
                        violations.push(Violation::new(
                            &self.description,
                            self.severity,
                            document.location(line.offset + found.start()),
                            self.reason,
                        ));
                    }
                }
            }
        }
        violations
    }
}

/// A style rule over one document.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Regular-expression match over text.
    TextPattern(TextPatternRule),
    /// Stateful line-by-line sweep.
    LineSweep(LineSweepRule),
    /// Declaration-tree walk.
    StructureWalk(DocumentationRule),
}

impl Rule {
    /// Static metadata for this rule.
    #[must_use]
    pub fn description(&self) -> &RuleDescription {
        match self {
            Self::TextPattern(rule) => rule.description(),
            Self::LineSweep(rule) => rule.description(),
            Self::StructureWalk(rule) => rule.description(),
        }
    }

    /// Stable identifier used by the exclusion pragma.
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        self.description().identifier
    }

    /// Runs the rule over one document.
    #[must_use]
    pub fn validate(&self, document: &SourceDocument) -> Vec<Violation> {
        match self {
            Self::TextPattern(rule) => rule.validate(document),
            Self::LineSweep(rule) => rule.validate(document),
            Self::StructureWalk(rule) => rule.validate(document),
        }
    }
}
