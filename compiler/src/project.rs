//! Metadata projection.
//!
//! Produces one descriptor per declared class, independent of whether
//! the class is reachable in the containment tree. Descriptors
//! serialize to JSON objects with a fixed key order: `name`, `isRoot`,
//! extra scalar fields, `min`/`max` (non-root only), `parameters`.

use arbor_core::{ClassNode, Model, Multiplicity, Scalar};
use arbor_graph::ModelIndex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::{CompileError, CompileResult};

/// One entry of a descriptor's `parameters` sequence: either a direct
/// child class (type `"class"`) or a declared attribute (its declared
/// type tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    /// Entry for a declared attribute.
    pub fn attribute(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Entry for a direct child class.
    pub fn child_class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: "class".to_string(),
        }
    }
}

/// Per-class metadata record, independent of tree position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Class name.
    pub name: String,
    /// Whether this is the model's root class.
    pub is_root: bool,
    /// Extra scalar fields carried over verbatim, coercion already
    /// decided at validation.
    pub extras: Vec<(String, Scalar)>,
    /// Containment cardinality. `None` exactly for the root class.
    pub cardinality: Option<Multiplicity>,
    /// Child-class entries first, then attribute entries.
    pub parameters: Vec<Parameter>,
}

impl Serialize for ClassDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("isRoot", &self.is_root)?;
        for (key, value) in &self.extras {
            map.serialize_entry(key, value)?;
        }
        if let Some(cardinality) = &self.cardinality {
            map.serialize_entry("min", &cardinality.min)?;
            map.serialize_entry("max", &cardinality.max)?;
        }
        map.serialize_entry("parameters", &self.parameters)?;
        map.end()
    }
}

/// Project every declared class into a descriptor, in declaration
/// order.
pub fn project(model: &Model, index: &ModelIndex<'_>) -> CompileResult<Vec<ClassDescriptor>> {
    model
        .classes
        .iter()
        .map(|class| project_class(class, index))
        .collect()
}

fn project_class(class: &ClassNode, index: &ModelIndex<'_>) -> CompileResult<ClassDescriptor> {
    let cardinality = match index.containment_edge(&class.name) {
        Some(edge) => Some(edge.multiplicity()),
        // The root has no containment edge by definition, and a class
        // no edge touches at all is a legitimate dangling declaration.
        None if class.is_root || index.child_edges(&class.name).is_empty() => None,
        // A non-root class with children but no parent means the edge
        // set is not a single rooted tree. Defensive: report, never
        // panic.
        None => {
            return Err(CompileError::MissingCardinality {
                class: class.name.clone(),
            })
        }
    };

    let mut parameters = Vec::new();
    for edge in index.child_edges(&class.name) {
        parameters.push(Parameter::child_class(edge.source.as_str()));
    }
    for attr in &class.attributes {
        parameters.push(Parameter::attribute(attr.name.as_str(), attr.ty.as_str()));
    }

    Ok(ClassDescriptor {
        name: class.name.clone(),
        is_root: class.is_root,
        extras: class.extras.clone(),
        cardinality,
        parameters,
    })
}
