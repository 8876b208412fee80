//! Declaration-tree arena.
//!
//! Nodes live in a flat arena and address their children by index, so
//! ownership stays strictly hierarchical and trees share cheaply across
//! the protocol-lookup cache.

/// Index of a node within a [`Structure`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Syntactic category of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `class Foo`
    Class,
    /// `struct Foo`
    Struct,
    /// `enum Foo`
    Enum,
    /// `protocol Foo`
    Protocol,
    /// `extension Foo`
    Extension,
    /// `var foo` at file scope
    GlobalVar,
    /// `var foo` inside a type
    InstanceVar,
    /// `static var foo`
    StaticVar,
    /// `class var foo`
    ClassVar,
    /// `func foo()` at file scope
    FreeFunction,
    /// `func foo()` inside a type
    InstanceMethod,
    /// `static func foo()`
    StaticMethod,
    /// `class func foo()`
    ClassMethod,
    /// `subscript(...)`
    Subscript,
    /// `typealias Foo`
    Typealias,
    /// `case foo` inside an enum
    EnumCase,
}

/// Visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessibility {
    /// `open`
    Open,
    /// `public`
    Public,
    /// `internal` (the default scope)
    Internal,
    /// `fileprivate`
    FilePrivate,
    /// `private`
    Private,
}

/// Tags attached to a declaration by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// A documentation comment is attached.
    HasDocComment,
    /// The declaration overrides a superclass member.
    Override,
    /// The declaration is an interface-builder outlet.
    IbOutlet,
}

/// One declaration in a document's tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureNode {
    /// Declaration kind.
    pub kind: DeclarationKind,
    /// Declared name, when the frontend resolved one.
    pub name: Option<String>,
    /// Visibility, when the frontend resolved one.
    pub accessibility: Option<Accessibility>,
    /// Byte offset of the declaration.
    pub offset: usize,
    /// Tags attached by the frontend.
    pub attributes: Vec<Attribute>,
    /// Inherited and conformed type names.
    pub inherited_types: Vec<String>,
    /// Child declarations, addressed into the owning arena.
    pub children: Vec<NodeId>,
}

impl StructureNode {
    /// Creates a bare node.
    #[must_use]
    pub fn new(kind: DeclarationKind, offset: usize) -> Self {
        Self {
            kind,
            name: None,
            accessibility: None,
            offset,
            attributes: Vec::new(),
            inherited_types: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the declared name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the visibility.
    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    /// Adds an attribute tag.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Sets the inherited type names.
    #[must_use]
    pub fn with_inherited_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inherited_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Checks whether the node carries an attribute.
    #[must_use]
    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

/// Arena of declaration nodes addressed by [`NodeId`].
///
/// Ids handed out by [`Structure::add`] stay valid for the life of the
/// arena; nodes are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    nodes: Vec<StructureNode>,
    roots: Vec<NodeId>,
}

impl Structure {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node under `parent`, or at the top level when `parent` is
    /// `None`, returning its id.
    pub fn add(&mut self, parent: Option<NodeId>, node: StructureNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// The node behind an id issued by this arena.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &StructureNode {
        &self.nodes[id.0]
    }

    /// Top-level declarations, in document order.
    pub fn roots(&self) -> impl Iterator<Item = &StructureNode> + '_ {
        self.roots.iter().map(|id| &self.nodes[id.0])
    }

    /// Direct children of a node, in document order.
    pub fn children<'a>(
        &'a self,
        node: &'a StructureNode,
    ) -> impl Iterator<Item = &'a StructureNode> + 'a {
        node.children.iter().map(|id| &self.nodes[id.0])
    }

    /// Total number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wires_roots_and_children() {
        let mut structure = Structure::new();
        let class = structure.add(
            None,
            StructureNode::new(DeclarationKind::Class, 0).with_name("Foo"),
        );
        structure.add(
            Some(class),
            StructureNode::new(DeclarationKind::InstanceVar, 12).with_name("bar"),
        );
        structure.add(
            None,
            StructureNode::new(DeclarationKind::FreeFunction, 30).with_name("baz"),
        );

        let roots: Vec<_> = structure.roots().collect();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].name.as_deref(), Some("Foo"));

        let children: Vec<_> = structure.children(roots[0]).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind, DeclarationKind::InstanceVar);
        assert_eq!(structure.len(), 3);
    }

    #[test]
    fn attributes_are_queryable() {
        let node = StructureNode::new(DeclarationKind::InstanceVar, 0)
            .with_attribute(Attribute::Override);
        assert!(node.has_attribute(Attribute::Override));
        assert!(!node.has_attribute(Attribute::HasDocComment));
    }
}
