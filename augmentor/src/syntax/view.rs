//! Read-only query surface a front end exposes to the scanner.

use super::{NodeId, NodeKind};

/// Queries the scanner and synthesizer issue against a syntax tree.
///
/// Implementations answer for handles they do not know with empty results
/// rather than panicking.
pub trait SyntaxView {
    /// Returns the root node.
    fn root(&self) -> NodeId;

    /// Returns the direct children of `node` in declaration order.
    fn children(&self, node: NodeId) -> &[NodeId];

    /// Returns the direct parent of `node`; `None` for the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Returns the kind of `node`.
    fn kind(&self, node: NodeId) -> Option<NodeKind>;

    /// Returns the identifier text of `node`, if it has one.
    fn name(&self, node: NodeId) -> Option<&str>;

    /// Returns `true` when `node` carries `modifier`.
    fn has_modifier(&self, node: NodeId, modifier: &str) -> bool;
}
