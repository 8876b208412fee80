//! The lint orchestrator.

use crate::document::SourceDocument;
use crate::rule::Rule;
use crate::types::Violation;
use tracing::debug;

/// Marker that opens an exclusion pragma on a document's first line.
pub const EXCLUSION_PRAGMA: &str = "// PRAGMA LINT: ";

/// Runs a fixed, ordered rule catalog over single documents.
///
/// Stateless apart from the read-only catalog. Violations come back in
/// catalog order, then each rule's own emission order, unsorted and
/// undeduplicated; callers wanting display order sort explicitly.
#[derive(Debug, Clone)]
pub struct Linter {
    rules: Vec<Rule>,
}

impl Linter {
    /// Creates a linter from an explicit catalog.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The catalog, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Lints one document, honoring its exclusion pragma.
    #[must_use]
    pub fn lint(&self, document: &SourceDocument) -> Vec<Violation> {
        let excluded = excluded_identifiers(document);
        let mut violations = Vec::new();
        for rule in &self.rules {
            if excluded.contains(&rule.identifier()) {
                debug!("rule {} excluded by pragma", rule.identifier());
                continue;
            }
            violations.extend(rule.validate(document));
        }
        violations
    }
}

/// Rule identifiers deactivated by the document's first line.
///
/// Only tokens of the exact shape `-<identifier>` count; everything else
/// on the pragma line is ignored.
fn excluded_identifiers(document: &SourceDocument) -> Vec<&str> {
    if !document.contents.starts_with(EXCLUSION_PRAGMA) {
        return Vec::new();
    }
    let Some(first) = document.first_line() else {
        return Vec::new();
    };
    first
        .split(' ')
        .filter_map(|token| token.trim().strip_prefix('-'))
        .filter(|identifier| !identifier.is_empty())
        .collect()
}
