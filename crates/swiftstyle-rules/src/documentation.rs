//! The documentation-comments instance.

use std::sync::Arc;
use swiftstyle_core::{
    DocumentLoader, DocumentationRule, ProtocolIndex, RuleDescription, Severity,
};

/// Description for `documentation-comments`.
pub const DOCUMENTATION_COMMENTS: RuleDescription = RuleDescription {
    identifier: "documentation-comments",
    name: "Documentation Comment",
    description: "This rule checks if you have documented public and internal properties \
                  and classes",
    non_triggering_examples: &[
        "// foo\npublic class Foo {\n// bar\nvar foo}\n",
        "// bar\npublic class Foo {}\n",
        "/*foo*/\nclass Foo {}\n",
        "// foo\ninternal class Foo {}\n",
        "// foo\ninternal var foo\n",
        "private class Foo {\nvar foo}\n",
        "private class Foo {\nprivate let foo}\n",
        "class Foo {}\n",
        "public class Foo {}\n",
        "extension Foo {}\n",
        "struct Foo {}\n",
        "extension Foo: UITextFieldDelegate { var Foo: String }\n",
        "struct Bar { Struct Foo {}}\n",
    ],
    triggering_examples: &[
        "extension Foo { var foo: String }\n",
        "var foo: String\n",
        "let Bar\n",
        "class Bar { class var Foo: String }\n",
        "struct Bar {\nstatic var foo: String\n}\n",
        "func == () {}\n",
    ],
};

/// The `documentation-comments` rule, wired to a conformance cache.
#[must_use]
pub fn documentation_comments(
    denylist: &[String],
    index: ProtocolIndex,
    loader: Arc<dyn DocumentLoader>,
) -> DocumentationRule {
    DocumentationRule::new(
        DOCUMENTATION_COMMENTS,
        Severity::Low,
        "Needs documentation comment",
        denylist,
        index,
        loader,
    )
}
