//! # swiftstyle-rules
//!
//! Built-in style rules for swiftstyle.
//!
//! ## Available rules
//!
//! | Identifier | Mechanism | Description |
//! |------------|-----------|-------------|
//! | `header-comment` | text pattern | Files should not have header comments |
//! | `return-arrow-whitespace` | text pattern | One space before return arrow and type |
//! | `trailing-whitespace` | text pattern (per line) | No trailing whitespace |
//! | `objc-identifier` | text pattern | `@objc` on its own line |
//! | `selector` | text pattern | Don't use `Selector()` |
//! | `blankline-function` | text pattern | Blank line between type header and first function |
//! | `closure-argument` | text pattern | Multi-line closures should not use `$0` |
//! | `case-indent` | line sweep | `case` one level deeper than `switch` |
//! | `documentation-comments` | structure walk | Public/internal declarations are documented |
//!
//! ## Usage
//!
//! ```ignore
//! use swiftstyle_core::Linter;
//! use swiftstyle_rules::catalog;
//!
//! let rules = catalog(&config, index, loader)?;
//! let linter = Linter::new(rules);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod case_indent;
mod catalog;
mod documentation;
mod text;

pub use case_indent::{case_indent, CASE_INDENT};
pub use catalog::{catalog, CatalogError};
pub use documentation::{documentation_comments, DOCUMENTATION_COMMENTS};
pub use text::{
    blankline_function, closure_argument, header_comment, objc_identifier,
    return_arrow_whitespace, selector, trailing_whitespace, BLANKLINE_FUNCTION, CLOSURE_ARGUMENT,
    HEADER_COMMENT, OBJC_IDENTIFIER, RETURN_ARROW_WHITESPACE, SELECTOR, TRAILING_WHITESPACE,
};
