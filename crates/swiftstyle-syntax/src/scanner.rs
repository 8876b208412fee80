//! Best-effort Swift declaration scanner.
//!
//! A single pass over the source lines recognizes declaration headers by
//! their leading tokens and tracks brace nesting to build the declaration
//! tree. This is line-granularity extraction, not parsing: brace
//! characters inside string literals skew nesting, and multi-line
//! declaration headers are only partially understood. The engine treats
//! the resulting tree as ground truth; everything here degrades to
//! "no declaration recognized" rather than failing.

use std::path::PathBuf;
use swiftstyle_core::{
    Accessibility, Attribute, DeclarationKind, NodeId, SourceDocument, Structure, StructureNode,
};

/// Parses Swift source text into a document.
#[must_use]
pub fn parse(path: Option<PathBuf>, source: &str) -> SourceDocument {
    let mut scanner = Scanner::default();
    let mut offset = 0;
    for line in source.split('\n') {
        scanner.scan_line(line, offset);
        offset += line.len() + 1;
    }
    SourceDocument::new(path, source, scanner.structure)
}

#[derive(Default)]
struct Scanner {
    structure: Structure,
    /// Enclosing bodies: the container node (or `None` for opaque bodies
    /// such as functions, closures, and control flow) and the depth its
    /// body occupies.
    stack: Vec<(Option<NodeId>, usize)>,
    depth: usize,
    /// A comment line directly above attaches to the next declaration.
    pending_comment: bool,
    /// A container declared but whose opening brace has not appeared yet.
    pending_container: Option<NodeId>,
    in_block_comment: bool,
}

impl Scanner {
    fn scan_line(&mut self, line: &str, offset: usize) {
        if self.in_block_comment {
            if line.contains("*/") {
                self.in_block_comment = false;
                self.pending_comment = true;
            }
            return;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.pending_comment = false;
            return;
        }
        if trimmed.starts_with("//") {
            self.pending_comment = true;
            return;
        }
        if trimmed.starts_with("/*") {
            if trimmed[2..].contains("*/") {
                self.pending_comment = true;
            } else {
                self.in_block_comment = true;
            }
            return;
        }

        // Trailing comments belong to this line, not the next one.
        let code = line.find("//").map_or(line, |at| &line[..at]);

        let mut segment_start = 0;
        for (i, ch) in code.char_indices() {
            match ch {
                '{' => {
                    self.scan_segment(&code[segment_start..i], offset + segment_start);
                    self.depth += 1;
                    let container = self.pending_container.take();
                    self.stack.push((container, self.depth));
                    segment_start = i + 1;
                }
                '}' => {
                    self.scan_segment(&code[segment_start..i], offset + segment_start);
                    self.depth = self.depth.saturating_sub(1);
                    while self.stack.last().is_some_and(|(_, depth)| *depth > self.depth) {
                        self.stack.pop();
                    }
                    segment_start = i + 1;
                }
                _ => {}
            }
        }
        self.scan_segment(&code[segment_start..], offset + segment_start);
        self.pending_comment = false;
    }

    /// Recognizes at most one declaration in a brace-free segment.
    fn scan_segment(&mut self, segment: &str, segment_offset: usize) {
        let parent = match self.stack.last() {
            None => None,
            Some((Some(id), _)) => Some(*id),
            // Opaque body: statements, not declarations.
            Some((None, _)) => return,
        };

        let stripped = segment.trim_start_matches(|c: char| c.is_whitespace() || c == ';');
        if stripped.is_empty() {
            return;
        }
        let offset = segment_offset + (segment.len() - stripped.len());
        let header = stripped.trim_end();

        let mut accessibility = None;
        let mut is_static = false;
        let mut class_modifier = false;
        let mut is_override = false;
        let mut is_outlet = false;

        let mut tokens = header.split_whitespace().peekable();
        let keyword = loop {
            let Some(token) = tokens.next() else { return };
            match token {
                t if t.starts_with('@') => {
                    if t == "@IBOutlet" {
                        is_outlet = true;
                    }
                }
                "open" => accessibility = Some(Accessibility::Open),
                "public" => accessibility = Some(Accessibility::Public),
                "internal" => accessibility = Some(Accessibility::Internal),
                t if t == "private" || t.starts_with("private(") => {
                    accessibility = Some(Accessibility::Private);
                }
                t if t == "fileprivate" || t.starts_with("fileprivate(") => {
                    accessibility = Some(Accessibility::FilePrivate);
                }
                "static" => is_static = true,
                "override" => is_override = true,
                "final" | "lazy" | "weak" | "unowned" | "required" | "convenience"
                | "mutating" | "nonmutating" | "indirect" | "dynamic" | "optional" => {}
                "class" => {
                    if matches!(tokens.peek(), Some(&"var" | &"let" | &"func")) {
                        class_modifier = true;
                    } else {
                        break "class";
                    }
                }
                "struct" | "enum" | "protocol" | "extension" | "var" | "let" | "func"
                | "typealias" | "deinit" | "case" => break token,
                t if t == "subscript" || t.starts_with("subscript(") => break "subscript",
                t if t == "init"
                    || t.starts_with("init(")
                    || t.starts_with("init?")
                    || t.starts_with("init!") =>
                {
                    break "init"
                }
                _ => return,
            }
        };

        let in_type = parent.is_some();
        let parent_kind = parent.map(|id| self.structure.node(id).kind);

        let (kind, name) = match keyword {
            "class" => (DeclarationKind::Class, tokens.next().map(type_name)),
            "struct" => (DeclarationKind::Struct, tokens.next().map(type_name)),
            "enum" => (DeclarationKind::Enum, tokens.next().map(type_name)),
            "protocol" => (DeclarationKind::Protocol, tokens.next().map(type_name)),
            "extension" => (DeclarationKind::Extension, tokens.next().map(type_name)),
            "typealias" => (DeclarationKind::Typealias, tokens.next().map(identifier_name)),
            "subscript" => (DeclarationKind::Subscript, Some("subscript".to_string())),
            "init" => (DeclarationKind::InstanceMethod, Some("init".to_string())),
            "deinit" => (DeclarationKind::InstanceMethod, Some("deinit".to_string())),
            "case" => {
                if parent_kind != Some(DeclarationKind::Enum) {
                    return;
                }
                (DeclarationKind::EnumCase, tokens.next().map(identifier_name))
            }
            "var" | "let" => {
                let kind = if !in_type {
                    DeclarationKind::GlobalVar
                } else if class_modifier {
                    DeclarationKind::ClassVar
                } else if is_static {
                    DeclarationKind::StaticVar
                } else {
                    DeclarationKind::InstanceVar
                };
                (kind, tokens.next().map(identifier_name))
            }
            "func" => {
                let kind = if !in_type {
                    DeclarationKind::FreeFunction
                } else if class_modifier {
                    DeclarationKind::ClassMethod
                } else if is_static {
                    DeclarationKind::StaticMethod
                } else {
                    DeclarationKind::InstanceMethod
                };
                (kind, tokens.next().map(function_name))
            }
            _ => return,
        };

        let is_container = matches!(
            kind,
            DeclarationKind::Class
                | DeclarationKind::Struct
                | DeclarationKind::Enum
                | DeclarationKind::Protocol
                | DeclarationKind::Extension
        );

        let mut node = StructureNode::new(kind, offset)
            .with_accessibility(accessibility.unwrap_or(Accessibility::Internal));
        if let Some(name) = name.filter(|name| !name.is_empty()) {
            node = node.with_name(name);
        }
        if is_container {
            node = node.with_inherited_types(inherited_types(header));
        }
        if self.pending_comment {
            node = node.with_attribute(Attribute::HasDocComment);
            self.pending_comment = false;
        }
        if is_override {
            node = node.with_attribute(Attribute::Override);
        }
        if is_outlet {
            node = node.with_attribute(Attribute::IbOutlet);
        }

        let id = self.structure.add(parent, node);
        if is_container {
            self.pending_container = Some(id);
        }
    }
}

/// Conformance clause of a type header: everything after the first colon,
/// comma-separated. Generic parameter clauses are not understood, a
/// limitation of token-level extraction.
fn inherited_types(header: &str) -> Vec<String> {
    header
        .split_once(':')
        .map(|(_, rest)| {
            rest.split(',')
                .filter_map(|part| part.split_whitespace().next())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn identifier_name(token: &str) -> String {
    token
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

fn type_name(token: &str) -> String {
    token
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '.')
        .collect()
}

fn function_name(token: &str) -> String {
    token.split('(').next().unwrap_or(token).to_string()
}
