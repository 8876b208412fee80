//! The case-indent sweep instance.

use swiftstyle_core::{LineSweepRule, RuleDescription, Severity};

/// Description for `case-indent`.
pub const CASE_INDENT: RuleDescription = RuleDescription {
    identifier: "case-indent",
    name: "Case statement indentation",
    description: "Checks that case statements are one level deeper than switch",
    non_triggering_examples: &["switch foo {\n    case bar:\nbreak\n}"],
    triggering_examples: &[
        "switch foo {\ncase bar:\nbreak\n}",
        "switch foo {\n    case bar:\nif foo {}\ncase baz:\n}",
        "switch foo {\n    case bar:\nbreak\ndefault: break\n}",
    ],
};

/// The `case-indent` rule.
///
/// # Errors
///
/// Returns the compilation error if a pattern is invalid.
pub fn case_indent(indent_step: usize) -> Result<LineSweepRule, regex::Error> {
    LineSweepRule::new(
        CASE_INDENT,
        r"^\s*switch\b",
        r"^\s*(case|default)\b",
        indent_step,
        Severity::Warning,
        "'case' should be indented more than 'switch'",
    )
}
