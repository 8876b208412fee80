//! The documentation-requirement rule.
//!
//! Flags declarations visible at public or internal scope that lack an
//! attached documentation comment, while exempting declarations that
//! merely satisfy an externally-defined contract.

use crate::document::SourceDocument;
use crate::index::{DocumentLoader, ProtocolIndex, ProtocolMember};
use crate::structure::{Accessibility, Attribute, DeclarationKind, StructureNode};
use crate::types::{RuleDescription, Severity, Violation};
use regex::Regex;
use std::sync::Arc;
use tracing::warn;

/// Flags undocumented public and internal declarations.
#[derive(Clone)]
pub struct DocumentationRule {
    description: RuleDescription,
    severity: Severity,
    reason: &'static str,
    denylist: Vec<Regex>,
    index: ProtocolIndex,
    loader: Arc<dyn DocumentLoader>,
}

impl std::fmt::Debug for DocumentationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentationRule")
            .field("description", &self.description)
            .field("severity", &self.severity)
            .field("denylist", &self.denylist.len())
            .field("index", &self.index.len())
            .finish_non_exhaustive()
    }
}

impl DocumentationRule {
    /// Creates the rule with an exemption index and the loader used to
    /// resolve protocol declarations.
    ///
    /// Denylist patterns that fail to compile are skipped with a warning;
    /// construction never fails.
    #[must_use]
    pub fn new(
        description: RuleDescription,
        severity: Severity,
        reason: &'static str,
        denylist: &[String],
        index: ProtocolIndex,
        loader: Arc<dyn DocumentLoader>,
    ) -> Self {
        let denylist = denylist
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    warn!("skipping unparseable denylist pattern {pattern:?}: {err}");
                    None
                }
            })
            .collect();
        Self {
            description,
            severity,
            reason,
            denylist,
            index,
            loader,
        }
    }

    /// Static metadata for this rule.
    #[must_use]
    pub fn description(&self) -> &RuleDescription {
        &self.description
    }

    /// Walks the document's top-level declarations and their direct
    /// members.
    #[must_use]
    pub fn validate(&self, document: &SourceDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        for node in document.structure.roots() {
            self.check_top_level(document, node, &mut violations);
        }
        violations
    }

    fn check_top_level(
        &self,
        document: &SourceDocument,
        node: &StructureNode,
        violations: &mut Vec<Violation>,
    ) {
        if !is_top_level_commentable(node.kind) {
            return;
        }
        // Extensions are always walked even when scope does not require a
        // comment: a type's documentation obligations follow it across
        // extension blocks.
        let is_extension = node.kind == DeclarationKind::Extension;
        if !(scope_needs_comment(node.accessibility) || is_extension) {
            return;
        }
        if self.inherits_from_denylist(&node.inherited_types) {
            return;
        }

        let excluded: Vec<ProtocolMember> = node
            .inherited_types
            .iter()
            .flat_map(|name| self.index.members_of(name, self.loader.as_ref()))
            .collect();

        // Container kinds are never themselves required to carry a
        // comment; only their eligible members are.
        if !is_container(node.kind) && !node.has_attribute(Attribute::HasDocComment) {
            violations.push(self.violation_at(document, node.offset));
        }

        for child in document.structure.children(node) {
            if scope_needs_comment(child.accessibility) && self.should_comment(child, &excluded) {
                violations.push(self.violation_at(document, child.offset));
            }
        }
    }

    fn should_comment(&self, node: &StructureNode, excluded: &[ProtocolMember]) -> bool {
        if !member_needs_comment(node.kind) {
            return false;
        }
        if node.has_attribute(Attribute::HasDocComment)
            || node.has_attribute(Attribute::Override)
            || node.has_attribute(Attribute::IbOutlet)
        {
            return false;
        }
        if let Some(name) = node.name.as_deref() {
            if is_name_excluded(name) {
                return false;
            }
            let member = ProtocolMember {
                name: name.to_string(),
                kind: node.kind,
            };
            if excluded.contains(&member) {
                return false;
            }
        }
        true
    }

    fn inherits_from_denylist(&self, inherited: &[String]) -> bool {
        self.denylist
            .iter()
            .any(|regex| inherited.iter().any(|name| regex.is_match(name)))
    }

    fn violation_at(&self, document: &SourceDocument, offset: usize) -> Violation {
        Violation::new(
            &self.description,
            self.severity,
            document.location(offset),
            self.reason,
        )
    }
}

fn scope_needs_comment(accessibility: Option<Accessibility>) -> bool {
    matches!(
        accessibility,
        Some(Accessibility::Public | Accessibility::Internal)
    )
}

fn is_top_level_commentable(kind: DeclarationKind) -> bool {
    matches!(
        kind,
        DeclarationKind::Class
            | DeclarationKind::Enum
            | DeclarationKind::Struct
            | DeclarationKind::Extension
            | DeclarationKind::Protocol
            | DeclarationKind::GlobalVar
            | DeclarationKind::FreeFunction
            | DeclarationKind::Typealias
    )
}

fn is_container(kind: DeclarationKind) -> bool {
    matches!(
        kind,
        DeclarationKind::Class | DeclarationKind::Struct | DeclarationKind::Extension
    )
}

fn member_needs_comment(kind: DeclarationKind) -> bool {
    matches!(
        kind,
        DeclarationKind::InstanceVar
            | DeclarationKind::StaticVar
            | DeclarationKind::ClassVar
            | DeclarationKind::InstanceMethod
            | DeclarationKind::StaticMethod
            | DeclarationKind::ClassMethod
            | DeclarationKind::Subscript
            | DeclarationKind::Typealias
    )
}

/// Initializers, deinitializers, and `hashValue` document themselves.
fn is_name_excluded(name: &str) -> bool {
    name.starts_with("init") || name == "deinit" || name == "hashValue"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MemoryLoader;
    use crate::structure::Structure;
    use std::path::PathBuf;

    const DESCRIPTION: RuleDescription = RuleDescription {
        identifier: "documentation-comments",
        name: "Documentation Comment",
        description: "Public and internal declarations need documentation",
        non_triggering_examples: &[],
        triggering_examples: &[],
    };

    fn rule_with(index: ProtocolIndex, loader: MemoryLoader, denylist: &[String]) -> DocumentationRule {
        DocumentationRule::new(
            DESCRIPTION,
            Severity::Low,
            "Needs documentation comment",
            denylist,
            index,
            Arc::new(loader),
        )
    }

    fn rule() -> DocumentationRule {
        rule_with(ProtocolIndex::new(), MemoryLoader::new(), &[])
    }

    fn doc_with(structure: Structure) -> SourceDocument {
        SourceDocument::new(None, "", structure)
    }

    #[test]
    fn undocumented_global_var_is_flagged() {
        let mut structure = Structure::new();
        structure.add(
            None,
            StructureNode::new(DeclarationKind::GlobalVar, 0)
                .with_name("foo")
                .with_accessibility(Accessibility::Internal),
        );
        let found = rule().validate(&doc_with(structure));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location.line, 1);
    }

    #[test]
    fn container_kinds_are_not_self_flagged() {
        let mut structure = Structure::new();
        for kind in [
            DeclarationKind::Class,
            DeclarationKind::Struct,
            DeclarationKind::Extension,
        ] {
            structure.add(
                None,
                StructureNode::new(kind, 0)
                    .with_name("Foo")
                    .with_accessibility(Accessibility::Public),
            );
        }
        assert!(rule().validate(&doc_with(structure)).is_empty());
    }

    #[test]
    fn documented_member_is_skipped() {
        let mut structure = Structure::new();
        let class = structure.add(
            None,
            StructureNode::new(DeclarationKind::Class, 0)
                .with_name("Foo")
                .with_accessibility(Accessibility::Public)
                .with_attribute(Attribute::HasDocComment),
        );
        structure.add(
            Some(class),
            StructureNode::new(DeclarationKind::InstanceVar, 20)
                .with_name("bar")
                .with_accessibility(Accessibility::Internal)
                .with_attribute(Attribute::HasDocComment),
        );
        assert!(rule().validate(&doc_with(structure)).is_empty());
    }

    #[test]
    fn override_and_outlet_members_are_exempt() {
        let mut structure = Structure::new();
        let class = structure.add(
            None,
            StructureNode::new(DeclarationKind::Class, 0)
                .with_name("Foo")
                .with_accessibility(Accessibility::Internal),
        );
        structure.add(
            Some(class),
            StructureNode::new(DeclarationKind::InstanceMethod, 10)
                .with_name("refresh")
                .with_accessibility(Accessibility::Internal)
                .with_attribute(Attribute::Override),
        );
        structure.add(
            Some(class),
            StructureNode::new(DeclarationKind::InstanceVar, 30)
                .with_name("label")
                .with_accessibility(Accessibility::Internal)
                .with_attribute(Attribute::IbOutlet),
        );
        assert!(rule().validate(&doc_with(structure)).is_empty());
    }

    #[test]
    fn initializers_and_hash_value_are_exempt_by_name() {
        let mut structure = Structure::new();
        let class = structure.add(
            None,
            StructureNode::new(DeclarationKind::Class, 0)
                .with_name("Foo")
                .with_accessibility(Accessibility::Internal),
        );
        for name in ["init", "init(coder:)", "deinit", "hashValue"] {
            structure.add(
                Some(class),
                StructureNode::new(DeclarationKind::InstanceMethod, 10)
                    .with_name(name)
                    .with_accessibility(Accessibility::Internal),
            );
        }
        assert!(rule().validate(&doc_with(structure)).is_empty());
    }

    #[test]
    fn denylisted_conformance_exempts_the_whole_node() {
        let mut structure = Structure::new();
        let ext = structure.add(
            None,
            StructureNode::new(DeclarationKind::Extension, 0)
                .with_name("Foo")
                .with_inherited_types(["UITextFieldDelegate"]),
        );
        structure.add(
            Some(ext),
            StructureNode::new(DeclarationKind::InstanceVar, 10)
                .with_name("Foo")
                .with_accessibility(Accessibility::Internal),
        );
        let denylist = vec![r"^UI\w+(Delegate|DataSource)\w*$".to_string()];
        let found = rule_with(ProtocolIndex::new(), MemoryLoader::new(), &denylist)
            .validate(&doc_with(structure));
        assert!(found.is_empty());
    }

    #[test]
    fn protocol_members_are_excluded_through_the_index() {
        // The protocol lives in a separate, indexed document.
        let mut protocol_structure = Structure::new();
        let protocol = protocol_structure.add(
            None,
            StructureNode::new(DeclarationKind::Protocol, 0).with_name("Greets"),
        );
        protocol_structure.add(
            Some(protocol),
            StructureNode::new(DeclarationKind::InstanceMethod, 10).with_name("greet"),
        );
        let protocol_doc = SourceDocument::new(
            Some(PathBuf::from("/greets.swift")),
            "",
            protocol_structure,
        );

        let mut index = ProtocolIndex::new();
        index.update([&protocol_doc]);
        let mut loader = MemoryLoader::new();
        loader.insert(protocol_doc);

        let mut structure = Structure::new();
        let class = structure.add(
            None,
            StructureNode::new(DeclarationKind::Class, 0)
                .with_name("Greeter")
                .with_accessibility(Accessibility::Internal)
                .with_inherited_types(["Greets"]),
        );
        structure.add(
            Some(class),
            StructureNode::new(DeclarationKind::InstanceMethod, 20)
                .with_name("greet")
                .with_accessibility(Accessibility::Internal),
        );
        structure.add(
            Some(class),
            StructureNode::new(DeclarationKind::InstanceMethod, 40)
                .with_name("wave")
                .with_accessibility(Accessibility::Internal),
        );

        let found = rule_with(index, loader, &[]).validate(&doc_with(structure));
        // `greet` satisfies the contract; `wave` is the type's own.
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location.offset, Some(40));
    }

    #[test]
    fn unindexed_protocol_exemption_silently_fails_to_apply() {
        let mut structure = Structure::new();
        let class = structure.add(
            None,
            StructureNode::new(DeclarationKind::Class, 0)
                .with_name("Greeter")
                .with_accessibility(Accessibility::Internal)
                .with_inherited_types(["Greets"]),
        );
        structure.add(
            Some(class),
            StructureNode::new(DeclarationKind::InstanceMethod, 20)
                .with_name("greet")
                .with_accessibility(Accessibility::Internal),
        );
        let found = rule().validate(&doc_with(structure));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn grandchildren_are_not_walked() {
        let mut structure = Structure::new();
        let class = structure.add(
            None,
            StructureNode::new(DeclarationKind::Class, 0)
                .with_name("Outer")
                .with_accessibility(Accessibility::Internal),
        );
        let inner = structure.add(
            Some(class),
            StructureNode::new(DeclarationKind::Class, 10)
                .with_name("Inner")
                .with_accessibility(Accessibility::Internal),
        );
        structure.add(
            Some(inner),
            StructureNode::new(DeclarationKind::InstanceVar, 20)
                .with_name("deep")
                .with_accessibility(Accessibility::Internal),
        );
        assert!(rule().validate(&doc_with(structure)).is_empty());
    }

    #[test]
    fn invalid_denylist_pattern_is_skipped() {
        let denylist = vec!["(".to_string(), "^Fine$".to_string()];
        let rule = rule_with(ProtocolIndex::new(), MemoryLoader::new(), &denylist);
        assert_eq!(rule.denylist.len(), 1);
    }
}
