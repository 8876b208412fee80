//! Text-pattern rule instances.
//!
//! Each rule here is one compiled regular expression with a fixed
//! severity and reason; the matching mechanism lives in the core crate.
//! The header-comment and return-arrow patterns use whole-text matching
//! with explicit line anchoring, the later of the two behaviors the
//! rules historically shipped with.

use swiftstyle_core::{MatchScope, RuleDescription, Severity, TextPatternRule};

/// Description for `header-comment`.
pub const HEADER_COMMENT: RuleDescription = RuleDescription {
    identifier: "header-comment",
    name: "Header Comment",
    description: "Files should not have header comments",
    non_triggering_examples: &["// MyView.swift\nimport UIKit\n", "import Foundation\n"],
    triggering_examples: &["// Copyright"],
};

/// The `header-comment` rule.
///
/// # Errors
///
/// Returns the compilation error if the pattern is invalid.
pub fn header_comment() -> Result<TextPatternRule, regex::Error> {
    TextPatternRule::new(
        HEADER_COMMENT,
        r"(?m)^//\s+Copyright",
        MatchScope::WholeText,
        Severity::Warning,
        "Files should not have header comments",
    )
}

/// Description for `return-arrow-whitespace`.
pub const RETURN_ARROW_WHITESPACE: RuleDescription = RuleDescription {
    identifier: "return-arrow-whitespace",
    name: "Returning Whitespace",
    description: "This rule checks whether you have 1 space before return arrow and return \
                  type. Newlines are also acceptable.",
    non_triggering_examples: &[
        "func abc() -> Int {}\n",
        "func abc() -> [Int] {}\n",
        "func abc() -> (Int, Int) {}\n",
        "var abc = {(param: Int) -> Void in }\n",
        "func abc() ->\n    Int {}\n",
        "func abc()\n    -> Int {}\n",
    ],
    triggering_examples: &[
        "func abc()->Int {}\n",
        "func abc()->[Int] {}\n",
        "func abc()->(Int, Int) {}\n",
        "func abc()-> Int {}\n",
        "func abc() ->Int {}\n",
        "func abc()  ->  Int {}\n",
        "var abc = {(param: Int) ->Bool in }\n",
        "var abc = {(param: Int)->Bool in }\n",
    ],
};

/// The `return-arrow-whitespace` rule.
///
/// # Errors
///
/// Returns the compilation error if the pattern is invalid.
pub fn return_arrow_whitespace() -> Result<TextPatternRule, regex::Error> {
    TextPatternRule::new(
        RETURN_ARROW_WHITESPACE,
        r"(\)\s*->[^\n|\s]|\)->[\n|\s]|\)\s{2,}->\s{2,})",
        MatchScope::WholeText,
        Severity::Warning,
        "File should have 1 space before return arrow and return type",
    )
}

/// Description for `trailing-whitespace`.
pub const TRAILING_WHITESPACE: RuleDescription = RuleDescription {
    identifier: "trailing-whitespace",
    name: "Trailing Whitespace",
    description: "This rule checks whether you don't have any trailing whitespace",
    non_triggering_examples: &["//\n", "\n", "", "\n\n"],
    triggering_examples: &["// \n"],
};

/// The `trailing-whitespace` rule. Runs per line.
///
/// # Errors
///
/// Returns the compilation error if the pattern is invalid.
pub fn trailing_whitespace() -> Result<TextPatternRule, regex::Error> {
    TextPatternRule::new(
        TRAILING_WHITESPACE,
        r"[ \t]+$",
        MatchScope::PerLine,
        Severity::Warning,
        "Line should have no trailing whitespace",
    )
}

/// Description for `objc-identifier`.
pub const OBJC_IDENTIFIER: RuleDescription = RuleDescription {
    identifier: "objc-identifier",
    name: "ObjC Identifier",
    description: "@objc should be on its own line",
    non_triggering_examples: &[
        "    @objc\n",
        "let foo: @objc_block () -> Void = {",
        "@objc(foo)\n    func bar() {}",
    ],
    triggering_examples: &["    private @objc func", "@objc func"],
};

/// The `objc-identifier` rule.
///
/// # Errors
///
/// Returns the compilation error if the pattern is invalid.
pub fn objc_identifier() -> Result<TextPatternRule, regex::Error> {
    TextPatternRule::new(
        OBJC_IDENTIFIER,
        r"(^[^\s]+\s+@objc|@objc[^\(\n_])",
        MatchScope::WholeText,
        Severity::Warning,
        "@objc should be on its own line",
    )
}

/// Description for `selector`.
pub const SELECTOR: RuleDescription = RuleDescription {
    identifier: "selector",
    name: "Selector",
    description: "Don't use Selector()",
    non_triggering_examples: &["addTarget(self, \"foo\")", "somethingSelector(self)"],
    triggering_examples: &[
        "addTarget(self, Selector(\"foo\"))",
        "let foo = Selector(\"foo\")",
        "foo(Selector(\"bar\")",
    ],
};

/// The `selector` rule.
///
/// # Errors
///
/// Returns the compilation error if the pattern is invalid.
pub fn selector() -> Result<TextPatternRule, regex::Error> {
    TextPatternRule::new(
        SELECTOR,
        r"[\W\s]+Selector\(",
        MatchScope::WholeText,
        Severity::Warning,
        "Don't use Selector",
    )
}

/// Description for `blankline-function`.
pub const BLANKLINE_FUNCTION: RuleDescription = RuleDescription {
    identifier: "blankline-function",
    name: "Blankline before function",
    description: "There should be a blankline after a type definition before the first function",
    non_triggering_examples: &[
        "class Foo {\n\nfunc bar() {}}",
        "class Foo {\nvar foo: String?}",
        "struct Foo {\n// Foo\nfunc bar() {}}",
    ],
    triggering_examples: &[
        "class Foo: Bar {\nfunc bar() {}}",
        "struct Foo {\nfunc bar() {}}",
        "enum Foo {\nfunc bar() {}}",
        "extension Foo {\nfunc bar() {}}",
        "extension Foo {\nprivate func bar() {}}",
        "protocol Foo {\n func bar() }",
    ],
};

/// The `blankline-function` rule.
///
/// # Errors
///
/// Returns the compilation error if the pattern is invalid.
pub fn blankline_function() -> Result<TextPatternRule, regex::Error> {
    TextPatternRule::new(
        BLANKLINE_FUNCTION,
        r"(struct|protocol|class|enum|extension)[^\{]*\{\n[^\n]*func\s",
        MatchScope::WholeText,
        Severity::Warning,
        "There should be a blankline after a type definition before the first function",
    )
}

/// Description for `closure-argument`.
pub const CLOSURE_ARGUMENT: RuleDescription = RuleDescription {
    identifier: "closure-argument",
    name: "Multi-line closure argument",
    description: "Multi-line closures should not use $0",
    non_triggering_examples: &[
        "foo.map { $0.toString() }\n",
        "foo.map { $0.something($1) }\n",
        "foo.map(self.something)\n",
        "foo.map{ foo in\nfoo.toString()\n}",
    ],
    triggering_examples: &["foo.map {\n$0\n}", "$0", "foo($0).map { $0.toString() }"],
};

/// The `closure-argument` rule.
///
/// # Errors
///
/// Returns the compilation error if the pattern is invalid.
pub fn closure_argument() -> Result<TextPatternRule, regex::Error> {
    TextPatternRule::new(
        CLOSURE_ARGUMENT,
        r"(?m)(^[^\{\n]*\$0|\$0[^\}\n]*$)",
        MatchScope::WholeText,
        Severity::Warning,
        "Multi-line closures should not use $0",
    )
}
