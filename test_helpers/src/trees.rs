//! Syntax tree fixtures.
//!
//! Each builder returns an [`anyhow::Result`] so test bodies can use `?`.

use anyhow::Result;
use augmentor::{NodeId, NodeKind, SyntaxTree};

/// Marker modifier used by the fixtures.
pub const PARTIAL: &str = "partial";

/// `namespace {namespace} { partial class {class} }`.
///
/// # Errors
///
/// Returns an error if the tree cannot be built.
pub fn class_in_namespace(namespace: &str, class: &str) -> Result<SyntaxTree> {
    let mut tree = SyntaxTree::new();
    let ns = tree.add_namespace(tree.root(), namespace)?;
    tree.add_type(ns, NodeKind::Class, class, ["public", PARTIAL])?;
    Ok(tree)
}

/// `partial class {class}` at the top level.
///
/// # Errors
///
/// Returns an error if the tree cannot be built.
pub fn top_level_class(class: &str) -> Result<SyntaxTree> {
    let mut tree = SyntaxTree::new();
    tree.add_type(tree.root(), NodeKind::Class, class, [PARTIAL])?;
    Ok(tree)
}

/// A namespace holding unmarked classes, a marked struct, and a method.
///
/// # Errors
///
/// Returns an error if the tree cannot be built.
pub fn unmarked(namespace: &str) -> Result<SyntaxTree> {
    let mut tree = SyntaxTree::new();
    let ns = tree.add_namespace(tree.root(), namespace)?;
    let plain = tree.add_type(ns, NodeKind::Class, "Plain", ["public", "sealed"])?;
    tree.add_node(plain, NodeKind::Method, Some("Run"), [PARTIAL])?;
    tree.add_type(ns, NodeKind::Struct, "Point", [PARTIAL])?;
    Ok(tree)
}

/// `namespace {outer} { partial class Outer { partial class {class} } }`.
///
/// # Errors
///
/// Returns an error if the tree cannot be built.
pub fn nested_class(outer: &str, class: &str) -> Result<SyntaxTree> {
    let mut tree = SyntaxTree::new();
    let ns = tree.add_namespace(tree.root(), outer)?;
    let wrapper = tree.add_type(ns, NodeKind::Class, "Outer", [PARTIAL])?;
    tree.add_type(wrapper, NodeKind::Class, class, [PARTIAL])?;
    Ok(tree)
}

/// One marked class called `class` in each of `namespaces`.
///
/// # Errors
///
/// Returns an error if the tree cannot be built.
pub fn same_class_in(namespaces: &[&str], class: &str) -> Result<SyntaxTree> {
    let mut tree = SyntaxTree::new();
    for namespace in namespaces {
        let ns = tree.add_namespace(tree.root(), namespace)?;
        tree.add_type(ns, NodeKind::Class, class, [PARTIAL])?;
    }
    Ok(tree)
}

/// Appends `partial class {class}` under `parent`.
///
/// # Errors
///
/// Returns an error if `parent` is not part of `tree`.
pub fn add_partial_class(tree: &mut SyntaxTree, parent: NodeId, class: &str) -> Result<NodeId> {
    Ok(tree.add_type(parent, NodeKind::Class, class, [PARTIAL])?)
}
