//! # swiftstyle-core
//!
//! Rule-evaluation engine for Swift style linting.
//!
//! This crate provides the engine only: the violation/location model, the
//! [`Rule`] sum type and its three evaluation mechanisms, the [`Linter`]
//! orchestrator with its exclusion pragma, and the [`ProtocolIndex`]
//! conformance cache used by the documentation rule. Parsing source text
//! into a [`SourceDocument`] is a collaborator's job, reached through the
//! [`DocumentLoader`] seam.
//!
//! ## Example
//!
//! ```ignore
//! use swiftstyle_core::Linter;
//!
//! let linter = Linter::new(rules);
//! for violation in linter.lint(&document) {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod docs;
mod document;
mod index;
mod linter;
mod rule;
mod structure;
mod sweep;
mod types;

pub use config::{CaseIndentConfig, Config, ConfigError, DocumentationConfig};
pub use docs::DocumentationRule;
pub use document::{Line, SourceDocument};
pub use index::{DocumentLoader, IndexError, MemoryLoader, ProtocolIndex, ProtocolMember};
pub use linter::{Linter, EXCLUSION_PRAGMA};
pub use rule::{MatchScope, Rule, TextPatternRule};
pub use structure::{Accessibility, Attribute, DeclarationKind, NodeId, Structure, StructureNode};
pub use sweep::LineSweepRule;
pub use types::{
    Location, LintResult, RuleDescription, Severity, Violation, ViolationDiagnostic,
};
