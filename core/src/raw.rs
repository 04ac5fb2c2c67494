//! Raw model structures as read from the interchange document.
//!
//! The loader fills these without interpreting anything: every field is
//! optional and carried as the string found in the document. The
//! analyzer turns a `RawModel` into a validated [`Model`](crate::Model)
//! or rejects it.

/// An unvalidated class declaration.
#[derive(Debug, Clone, Default)]
pub struct RawClass {
    /// The `name` attribute, if present.
    pub name: Option<String>,
    /// The `isRoot` attribute, verbatim, if present.
    pub is_root: Option<String>,
    /// Nested `Attribute` elements, in document order.
    pub attributes: Vec<RawAttribute>,
    /// Any further attributes on the class element, in document order.
    pub extras: Vec<(String, String)>,
}

/// An unvalidated attribute declaration within a class.
#[derive(Debug, Clone, Default)]
pub struct RawAttribute {
    pub name: Option<String>,
    pub ty: Option<String>,
}

/// An unvalidated aggregation declaration.
#[derive(Debug, Clone, Default)]
pub struct RawAggregation {
    pub source: Option<String>,
    pub target: Option<String>,
    pub source_multiplicity: Option<String>,
}

/// The whole document as loaded, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawModel {
    /// Class declarations in document order.
    pub classes: Vec<RawClass>,
    /// Aggregation declarations in document order.
    pub aggregations: Vec<RawAggregation>,
}

impl RawModel {
    pub fn new() -> Self {
        Self::default()
    }
}
