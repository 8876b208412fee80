//! The fixed rule catalog.

use crate::{case_indent, documentation, text};
use std::sync::Arc;
use swiftstyle_core::{Config, DocumentLoader, ProtocolIndex, Rule, TextPatternRule};
use thiserror::Error;

/// Catalog construction errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A rule's pattern failed to compile.
    #[error("invalid pattern for rule {identifier}: {source}")]
    Pattern {
        /// Identifier of the rule whose pattern failed.
        identifier: &'static str,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

fn compiled(
    identifier: &'static str,
    rule: Result<TextPatternRule, regex::Error>,
) -> Result<Rule, CatalogError> {
    rule.map(Rule::TextPattern)
        .map_err(|source| CatalogError::Pattern { identifier, source })
}

/// Builds the full catalog in its fixed evaluation order.
///
/// The index must be built before lint runs begin; it is read-only from
/// here on. The loader resolves protocol declarations the documentation
/// rule needs for exemptions.
///
/// # Errors
///
/// Returns [`CatalogError`] if any rule pattern fails to compile.
pub fn catalog(
    config: &Config,
    index: ProtocolIndex,
    loader: Arc<dyn DocumentLoader>,
) -> Result<Vec<Rule>, CatalogError> {
    Ok(vec![
        compiled(text::HEADER_COMMENT.identifier, text::header_comment())?,
        compiled(
            text::RETURN_ARROW_WHITESPACE.identifier,
            text::return_arrow_whitespace(),
        )?,
        compiled(text::TRAILING_WHITESPACE.identifier, text::trailing_whitespace())?,
        compiled(text::OBJC_IDENTIFIER.identifier, text::objc_identifier())?,
        compiled(text::SELECTOR.identifier, text::selector())?,
        compiled(text::BLANKLINE_FUNCTION.identifier, text::blankline_function())?,
        compiled(text::CLOSURE_ARGUMENT.identifier, text::closure_argument())?,
        case_indent::case_indent(config.case_indent.indent_step)
            .map(Rule::LineSweep)
            .map_err(|source| CatalogError::Pattern {
                identifier: case_indent::CASE_INDENT.identifier,
                source,
            })?,
        Rule::StructureWalk(documentation::documentation_comments(
            &config.documentation.denylist,
            index,
            loader,
        )),
    ])
}
