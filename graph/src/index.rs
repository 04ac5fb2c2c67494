//! Indexes for efficient model lookups.

use arbor_core::{AggregationEdge, ClassNode, Model};
use std::collections::HashMap;

/// Read-only lookup structures over a validated [`Model`].
///
/// Built once after validation, borrowed by both compilation stages,
/// and discarded when compilation finishes. Nothing here is mutated
/// after `build` returns.
#[derive(Debug)]
pub struct ModelIndex<'m> {
    /// Class name -> class node.
    by_name: HashMap<&'m str, &'m ClassNode>,
    /// Containing class name -> edges where that class is the target,
    /// in document order.
    child_edges_by_target: HashMap<&'m str, Vec<&'m AggregationEdge>>,
    /// Contained class name -> its single containment edge. Absent for
    /// the root.
    incoming_edge_by_source: HashMap<&'m str, &'m AggregationEdge>,
}

impl<'m> ModelIndex<'m> {
    /// Build the index from a validated model.
    pub fn build(model: &'m Model) -> Self {
        let mut by_name = HashMap::new();
        for class in &model.classes {
            by_name.insert(class.name.as_str(), class);
        }

        let mut child_edges_by_target: HashMap<&str, Vec<&AggregationEdge>> = HashMap::new();
        let mut incoming_edge_by_source = HashMap::new();
        for edge in &model.edges {
            child_edges_by_target
                .entry(edge.target.as_str())
                .or_default()
                .push(edge);
            // Validation rejects duplicate sources, so this never
            // overwrites an existing entry.
            incoming_edge_by_source.insert(edge.source.as_str(), edge);
        }

        Self {
            by_name,
            child_edges_by_target,
            incoming_edge_by_source,
        }
    }

    /// Look up a class by name.
    pub fn class(&self, name: &str) -> Option<&'m ClassNode> {
        self.by_name.get(name).copied()
    }

    /// Edges where the named class is the containing target, in
    /// document order. Empty for leaf classes.
    pub fn child_edges(&self, target: &str) -> &[&'m AggregationEdge] {
        self.child_edges_by_target
            .get(target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The single edge where the named class is the contained source,
    /// if any. `None` for the root class.
    pub fn containment_edge(&self, source: &str) -> Option<&'m AggregationEdge> {
        self.incoming_edge_by_source.get(source).copied()
    }
}
