//! Containment tree lowering.
//!
//! The tree mirrors reachability from the root: a class appears exactly
//! once if containment edges lead to it from the root, and not at all
//! otherwise. Dangling declarations are intentionally omitted; the
//! metadata projector is the stage that covers every declared class.

use arbor_core::Model;
use arbor_graph::ModelIndex;

/// One node of the derived containment tree.
///
/// Built fresh per compilation and exclusively owned by its parent;
/// validation guarantees no class can be instantiated under two
/// parents, so nodes are never shared or aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNode {
    /// Class name, used as the element tag on emission.
    pub tag: String,
    /// Attribute leaves `(name, type)`, in declaration order. Emitted
    /// before any class children.
    pub leaves: Vec<(String, String)>,
    /// Child containers, one per incoming edge, in edge discovery
    /// order.
    pub children: Vec<ContainerNode>,
}

/// Build the containment tree rooted at the model's root class.
pub fn build_tree(model: &Model, index: &ModelIndex<'_>) -> ContainerNode {
    build_node(&model.root, index)
}

fn build_node(name: &str, index: &ModelIndex<'_>) -> ContainerNode {
    // An edge may name a class with no declaration; it still yields an
    // element, just with no attribute leaves.
    let leaves = index
        .class(name)
        .map(|class| {
            class
                .attributes
                .iter()
                .map(|attr| (attr.name.clone(), attr.ty.clone()))
                .collect()
        })
        .unwrap_or_default();

    let children = index
        .child_edges(name)
        .iter()
        .map(|edge| build_node(&edge.source, index))
        .collect();

    ContainerNode {
        tag: name.to_string(),
        leaves,
        children,
    }
}
