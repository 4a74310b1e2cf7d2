//! Serializable exchange format for syntax trees.
//!
//! External front ends emit a nested document whose top-level members belong
//! to the compilation unit:
//!
//! ```json
//! {
//!   "members": [
//!     { "kind": "namespace", "name": "Acme", "members": [
//!       { "kind": "class", "name": "Foo", "modifiers": ["public", "partial"] }
//!     ] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{NodeId, NodeKind, SyntaxTree};
use crate::error::{AugmentError, Result};

/// Root of a serialized syntax tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntaxDocument {
    /// Top-level members of the compilation unit.
    #[serde(default)]
    pub members: Vec<NodeDocument>,
}

/// A serialized syntax node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDocument {
    /// Node kind.
    pub kind: NodeKind,
    /// Identifier text; required for namespaces, types, and methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Modifier tags in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
    /// Nested members in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<NodeDocument>,
}

impl SyntaxDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::Json`] when the text is not a valid document.
    #[cfg(feature = "serde_json")]
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Lowers the document into an arena tree.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidDocument`] when a member is a nested
    /// compilation unit or a named kind lacks its name.
    pub fn to_tree(&self) -> Result<SyntaxTree> {
        let mut tree = SyntaxTree::new();
        let root = tree.root();
        for (index, member) in self.members.iter().enumerate() {
            lower(&mut tree, root, member, &format!("members/{index}"))?;
        }
        Ok(tree)
    }
}

impl TryFrom<&SyntaxDocument> for SyntaxTree {
    type Error = AugmentError;

    fn try_from(document: &SyntaxDocument) -> Result<Self> {
        document.to_tree()
    }
}

fn lower(tree: &mut SyntaxTree, parent: NodeId, node: &NodeDocument, path: &str) -> Result<()> {
    if node.kind == NodeKind::CompilationUnit {
        return Err(AugmentError::invalid_document(
            path,
            "compilation_unit may only appear as the document root",
        ));
    }
    if node.kind.requires_name() && node.name.as_deref().is_none_or(str::is_empty) {
        return Err(AugmentError::invalid_document(
            path,
            format!("{} nodes require a name", node.kind.as_str()),
        ));
    }

    let id = tree.add_node(
        parent,
        node.kind,
        node.name.as_deref(),
        node.modifiers.iter().cloned(),
    )?;
    for (index, member) in node.members.iter().enumerate() {
        lower(tree, id, member, &format!("{path}/members/{index}"))?;
    }
    Ok(())
}
