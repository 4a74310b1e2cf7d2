//! Declaration scanning.
//!
//! [`Scanner`] walks a tree in pre-order, depth-first, visiting children in
//! declaration order, and yields every node accepted by its [`ScanRule`].
//! The walk is lazy: a driver that stops pulling from [`Candidates`] abandons
//! the pass between nodes without leaving any shared state behind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::syntax::{NodeId, NodeKind, SyntaxTree, SyntaxView};

/// Marker modifier matched by [`ScanRule::default`].
pub const DEFAULT_MARKER: &str = "partial";

/// Membership predicate applied to every visited node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRule {
    /// Modifier a node must carry.
    pub marker: String,
    /// Kinds considered class-like.
    pub kinds: Vec<NodeKind>,
}

impl Default for ScanRule {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_owned(),
            kinds: vec![NodeKind::Class],
        }
    }
}

impl ScanRule {
    /// Returns `true` when `node` has an accepted kind and carries the marker.
    #[must_use]
    pub fn matches<V: SyntaxView + ?Sized>(&self, view: &V, node: NodeId) -> bool {
        view.kind(node).is_some_and(|kind| self.kinds.contains(&kind))
            && view.has_modifier(node, &self.marker)
    }
}

/// A matched declaration, borrowed from the tree it was found in.
pub struct Declaration<'t, V: ?Sized = SyntaxTree> {
    view: &'t V,
    id: NodeId,
}

impl<V: ?Sized> Clone for Declaration<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for Declaration<'_, V> {}

impl<V: ?Sized> PartialEq for Declaration<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.view, other.view) && self.id == other.id
    }
}

impl<V: ?Sized> Eq for Declaration<'_, V> {}

impl<'t, V: SyntaxView + ?Sized> Declaration<'t, V> {
    /// Wraps `id` as a declaration of `view`.
    #[must_use]
    pub const fn new(view: &'t V, id: NodeId) -> Self {
        Self { view, id }
    }

    /// Returns the node handle.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tree the declaration belongs to.
    #[must_use]
    pub const fn view(&self) -> &'t V {
        self.view
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn name(&self) -> Option<&'t str> {
        self.view.name(self.id)
    }

    /// Returns the node kind.
    #[must_use]
    pub fn kind(&self) -> Option<NodeKind> {
        self.view.kind(self.id)
    }

    /// Returns `true` when the declaration carries `modifier`.
    #[must_use]
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.view.has_modifier(self.id, modifier)
    }

    /// Returns the name of the immediate parent when that parent is a
    /// namespace.
    ///
    /// Only the direct parent is inspected: a class nested in another type
    /// reports no container even if a namespace encloses the outer type.
    #[must_use]
    pub fn container(&self) -> Option<&'t str> {
        let parent = self.view.parent(self.id)?;
        if self.view.kind(parent).is_some_and(NodeKind::is_namespace) {
            self.view.name(parent)
        } else {
            None
        }
    }
}

impl<V: SyntaxView + ?Sized> fmt::Debug for Declaration<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

/// Collects declarations matching a [`ScanRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    rule: ScanRule,
}

impl Scanner {
    /// Creates a scanner for `rule`.
    #[must_use]
    pub const fn new(rule: ScanRule) -> Self {
        Self { rule }
    }

    /// Returns the active rule.
    #[must_use]
    pub const fn rule(&self) -> &ScanRule {
        &self.rule
    }

    /// Returns a lazy pre-order walk over the matches in `view`.
    #[must_use]
    pub fn candidates<'t, 's, V: SyntaxView + ?Sized>(
        &'s self,
        view: &'t V,
    ) -> Candidates<'t, 's, V> {
        Candidates {
            view,
            rule: &self.rule,
            stack: vec![view.root()],
        }
    }

    /// Collects every match in `view` in visitation order.
    #[must_use]
    pub fn scan<'t, V: SyntaxView + ?Sized>(&self, view: &'t V) -> Vec<Declaration<'t, V>> {
        let found: Vec<_> = self.candidates(view).collect();
        tracing::debug!(marker = %self.rule.marker, matches = found.len(), "scan complete");
        found
    }
}

/// Scans `view` with the default rule (`partial` classes).
#[must_use]
pub fn scan<V: SyntaxView + ?Sized>(view: &V) -> Vec<Declaration<'_, V>> {
    Scanner::default().scan(view)
}

/// Lazy pre-order iterator returned by [`Scanner::candidates`].
pub struct Candidates<'t, 's, V: ?Sized> {
    view: &'t V,
    rule: &'s ScanRule,
    stack: Vec<NodeId>,
}

impl<'t, V: SyntaxView + ?Sized> Iterator for Candidates<'t, '_, V> {
    type Item = Declaration<'t, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(self.view.children(node).iter().rev().copied());
            tracing::trace!(%node, "visiting node");
            if self.rule.matches(self.view, node) {
                let declaration = Declaration::new(self.view, node);
                tracing::debug!(name = ?declaration.name(), %node, "matched declaration");
                return Some(declaration);
            }
        }
        None
    }
}

impl<V: SyntaxView + ?Sized> fmt::Debug for Candidates<'_, '_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidates")
            .field("rule", self.rule)
            .field("pending", &self.stack.len())
            .finish()
    }
}
