//! Validated model structures.
//!
//! A `Model` is produced by the analyzer and is immutable from that
//! point on. Downstream stages (graph index, tree builder, metadata
//! projector) borrow from it and never copy or mutate it.

use crate::Scalar;

/// A scalar field of a class: an opaque type tag under a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Attribute name, unique within its owning class.
    pub name: String,
    /// Free-form type tag, not interpreted further.
    pub ty: String,
}

impl AttributeSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A validated class declaration.
#[derive(Debug, Clone)]
pub struct ClassNode {
    /// Unique class name.
    pub name: String,
    /// Exactly one class per model has this set.
    pub is_root: bool,
    /// Declared attributes, in declaration order.
    pub attributes: Vec<AttributeSpec>,
    /// Any further scalar fields found on the class element, already
    /// coerced, in document order. Excludes `name` and `isRoot`.
    pub extras: Vec<(String, Scalar)>,
}

/// A directed containment relationship: `source` is contained by
/// `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationEdge {
    /// Name of the contained class.
    pub source: String,
    /// Name of the containing class.
    pub target: String,
    /// Range string of the form `"min..max"`, e.g. `"0..1"`, `"1..*"`.
    pub source_multiplicity: String,
}

impl AggregationEdge {
    /// Split the multiplicity into its min/max bounds.
    pub fn multiplicity(&self) -> Multiplicity {
        Multiplicity::parse(&self.source_multiplicity)
    }
}

/// A parsed `min..max` range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplicity {
    pub min: String,
    pub max: String,
}

impl Multiplicity {
    /// Split a range string on `".."`: the first segment is min, the
    /// last is max. A degenerate string with no delimiter yields
    /// min = max.
    pub fn parse(range: &str) -> Self {
        let mut parts = range.split("..");
        let min = parts.next().unwrap_or(range).to_string();
        let max = parts.last().map(str::to_string).unwrap_or_else(|| min.clone());
        Self { min, max }
    }
}

/// The validated whole: classes with unique names, edges forming a
/// single rooted containment tree, and the resolved root class name.
#[derive(Debug, Clone)]
pub struct Model {
    /// Classes in declaration order.
    pub classes: Vec<ClassNode>,
    /// Aggregation edges in document order.
    pub edges: Vec<AggregationEdge>,
    /// Name of the class flagged `isRoot`, resolved once during
    /// validation.
    pub root: String,
}

impl Model {
    /// Look up the class flagged as root, if still present.
    pub fn root_class(&self) -> Option<&ClassNode> {
        self.classes.iter().find(|c| c.name == self.root)
    }
}
