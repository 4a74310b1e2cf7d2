//! Arena-backed syntax tree with parent links.

use super::{NodeId, NodeKind, SyntaxView};
use crate::error::{AugmentError, Result};

/// A single node in a [`SyntaxTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    name: Option<String>,
    modifiers: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Returns the node kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the identifier text, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the modifier tags in source order.
    #[must_use]
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Returns the parent handle; `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns child handles in declaration order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Syntax tree owned by the front end for the duration of a pass.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. The root is always
/// a [`NodeKind::CompilationUnit`] and children keep insertion order.
///
/// # Examples
///
/// ```
/// use augmentor::{NodeKind, SyntaxTree};
///
/// let mut tree = SyntaxTree::new();
/// let acme = tree.add_namespace(tree.root(), "Acme")?;
/// tree.add_type(acme, NodeKind::Class, "Foo", ["public", "partial"])?;
/// assert_eq!(tree.node_count(), 3);
/// # Ok::<(), augmentor::AugmentError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTree {
    /// Creates a tree holding only a compilation unit root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::CompilationUnit,
                name: None,
                modifiers: Vec::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Returns the root handle.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::from_raw(0)
    }

    /// Returns the number of nodes, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Looks up a node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.to_raw())
    }

    /// Appends a node under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::UnknownNode`] when `parent` is not part of this
    /// tree.
    pub fn add_node<I, S>(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: Option<&str>,
        modifiers: I,
    ) -> Result<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = NodeId::from_raw(self.nodes.len());
        let parent_node = self
            .nodes
            .get_mut(parent.to_raw())
            .ok_or(AugmentError::UnknownNode(parent.to_raw()))?;
        parent_node.children.push(id);
        self.nodes.push(Node {
            kind,
            name: name.map(str::to_owned),
            modifiers: modifiers.into_iter().map(Into::into).collect(),
            parent: Some(parent),
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Appends a namespace named `name` under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::UnknownNode`] when `parent` is unknown.
    pub fn add_namespace(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        self.add_node(parent, NodeKind::Namespace, Some(name), std::iter::empty::<String>())
    }

    /// Appends a type declaration under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::UnknownNode`] when `parent` is unknown.
    pub fn add_type<I, S>(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: &str,
        modifiers: I,
    ) -> Result<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_node(parent, kind, Some(name), modifiers)
    }
}

impl SyntaxView for SyntaxTree {
    fn root(&self) -> NodeId {
        Self::root(self)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(Node::children).unwrap_or_default()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(Node::parent)
    }

    fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.node(node).map(Node::kind)
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.node(node).and_then(Node::name)
    }

    fn has_modifier(&self, node: NodeId, modifier: &str) -> bool {
        self.node(node)
            .is_some_and(|n| n.modifiers.iter().any(|m| m == modifier))
    }
}
