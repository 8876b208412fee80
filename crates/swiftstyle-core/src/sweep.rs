//! Stateful line-sweep rules.

use crate::document::SourceDocument;
use crate::types::{Location, RuleDescription, Severity, Violation};
use regex::Regex;

/// A rule evaluated as an automaton over the line table.
///
/// The sweep recognizes a construct by the line matching its start
/// pattern, records that header line's indentation, and requires every
/// line matching the member pattern inside the construct to sit exactly
/// one indent step deeper. Brace depth is tracked per brace character;
/// the construct ends when depth returns to zero. Braces inside string or
/// comment literals are not understood, a known limitation of
/// line-granularity analysis, and unbalanced input simply leaves the
/// remainder of the document unchecked.
#[derive(Debug, Clone)]
pub struct LineSweepRule {
    description: RuleDescription,
    start: Regex,
    member: Regex,
    indent_step: usize,
    severity: Severity,
    reason: &'static str,
}

impl LineSweepRule {
    /// Compiles a sweep rule.
    ///
    /// # Errors
    ///
    /// Returns the compilation error if either pattern is invalid.
    pub fn new(
        description: RuleDescription,
        start_pattern: &str,
        member_pattern: &str,
        indent_step: usize,
        severity: Severity,
        reason: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            description,
            start: Regex::new(start_pattern)?,
            member: Regex::new(member_pattern)?,
            indent_step,
            severity,
            reason,
        })
    }

    /// Static metadata for this rule.
    #[must_use]
    pub fn description(&self) -> &RuleDescription {
        &self.description
    }

    /// Sweeps one document.
    #[must_use]
    pub fn validate(&self, document: &SourceDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut depth: usize = 0;
        let mut header_indent: Option<usize> = None;

        for line in &document.lines {
            let Some(base) = header_indent else {
                if self.start.is_match(&line.content) {
                    let opens = line.content.matches('{').count();
                    depth = opens.saturating_sub(line.content.matches('}').count());
                    // A construct whose braces balance on its own header
                    // line has no member lines to check.
                    if opens == 0 || depth > 0 {
                        header_indent = Some(indentation(&line.content));
                    }
                }
                continue;
            };

            if self.member.is_match(&line.content)
                && indentation(&line.content) != base + self.indent_step
            {
                violations.push(Violation::new(
                    &self.description,
                    self.severity,
                    Location::from_line(document.path.clone(), line.index),
                    self.reason,
                ));
            }

            depth += line.content.matches('{').count();
            depth = depth.saturating_sub(line.content.matches('}').count());
            if depth == 0 {
                header_indent = None;
            }
        }

        violations
    }
}

/// Count of leading whitespace characters.
fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
