//! Syntax tree model consumed by the scanner.
//!
//! The front end that parses host source text is external. It hands over a
//! tree either by building a [`SyntaxTree`] directly or by emitting a JSON
//! [`SyntaxDocument`] that is lowered into one. The scanner itself only needs
//! the queries on [`SyntaxView`].

mod document;
mod kind;
mod tree;
mod view;

pub use document::{NodeDocument, SyntaxDocument};
pub use kind::NodeKind;
pub use tree::{Node, SyntaxTree};
pub use view::SyntaxView;

use std::fmt;

/// Handle to a node stored in a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Builds a handle from a raw arena position.
    #[must_use]
    pub const fn from_raw(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena position.
    #[must_use]
    pub const fn to_raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
