//! Model validation.
//!
//! Checks run in a fixed order and stop at the first violation; a
//! failed validation never leaves partially lowered state behind.
//! Lowering from the raw document form also performs the one-time
//! boundary coercions: `isRoot` becomes a bool and extra scalar fields
//! become [`Scalar`] values.

use arbor_core::{
    AggregationEdge, AttributeSpec, ClassNode, Model, RawAggregation, RawClass, RawModel, Scalar,
};
use std::collections::{HashMap, HashSet};

use crate::{ValidationError, ValidationResult};

/// Validate a raw model and lower it into a [`Model`].
pub fn validate(raw: RawModel) -> ValidationResult<Model> {
    if raw.classes.is_empty() {
        return Err(ValidationError::NoClasses);
    }

    // Field presence and root resolution in one scan. The root is
    // resolved here once and passed along in the Model; downstream
    // stages never re-scan for it.
    let mut root: Option<String> = None;
    let mut root_count = 0;
    for class in &raw.classes {
        let name = class
            .name
            .as_deref()
            .ok_or_else(|| ValidationError::missing_attribute("class", "name"))?;
        let is_root = class
            .is_root
            .as_deref()
            .ok_or_else(|| ValidationError::missing_attribute(format!("class '{name}'"), "isRoot"))?;
        if is_root == "true" {
            root_count += 1;
            root = Some(name.to_string());
        }
    }
    let root = match (root, root_count) {
        (Some(root), 1) => root,
        (_, count) => return Err(ValidationError::RootCountInvalid { count }),
    };

    // Class names must be unique across the model.
    let mut seen = HashSet::new();
    for class in &raw.classes {
        if let Some(name) = class.name.as_deref() {
            if !seen.insert(name) {
                return Err(ValidationError::duplicate_name(name, "the model"));
            }
        }
    }

    let mut classes = Vec::with_capacity(raw.classes.len());
    for class in raw.classes {
        classes.push(lower_class(class)?);
    }

    // Each class may be the source of at most one aggregation; a
    // second one would give it two containment parents and the edge
    // set would no longer be tree-shaped.
    let mut edges = Vec::with_capacity(raw.aggregations.len());
    let mut sources = HashSet::new();
    for aggregation in raw.aggregations {
        let edge = lower_aggregation(aggregation)?;
        if edge.source == edge.target {
            return Err(ValidationError::SelfAggregation { class: edge.source });
        }
        if !sources.insert(edge.source.clone()) {
            return Err(ValidationError::DuplicateContainment { class: edge.source });
        }
        edges.push(edge);
    }

    check_acyclic(&edges)?;

    Ok(Model {
        classes,
        edges,
        root,
    })
}

/// Lower one raw class, checking attribute well-formedness and
/// uniqueness within the class.
fn lower_class(raw: RawClass) -> ValidationResult<ClassNode> {
    let name = raw
        .name
        .ok_or_else(|| ValidationError::missing_attribute("class", "name"))?;
    let is_root = raw.is_root.as_deref() == Some("true");

    let mut seen = HashSet::new();
    let mut attributes = Vec::with_capacity(raw.attributes.len());
    for attr in raw.attributes {
        let attr_name = attr.name.ok_or_else(|| {
            ValidationError::missing_attribute(format!("attribute of class '{name}'"), "name")
        })?;
        let ty = attr.ty.ok_or_else(|| {
            ValidationError::missing_attribute(
                format!("attribute '{attr_name}' of class '{name}'"),
                "type",
            )
        })?;
        if !seen.insert(attr_name.clone()) {
            return Err(ValidationError::duplicate_name(
                attr_name,
                format!("class '{name}'"),
            ));
        }
        attributes.push(AttributeSpec { name: attr_name, ty });
    }

    let extras = raw
        .extras
        .into_iter()
        .map(|(key, value)| (key, Scalar::coerce(&value)))
        .collect();

    Ok(ClassNode {
        name,
        is_root,
        attributes,
        extras,
    })
}

/// Lower one raw aggregation, checking that all fields are present.
fn lower_aggregation(raw: RawAggregation) -> ValidationResult<AggregationEdge> {
    let edge_desc = describe_aggregation(&raw);
    let source_multiplicity = raw
        .source_multiplicity
        .ok_or_else(|| ValidationError::missing_aggregation_field(edge_desc.as_str(), "sourceMultiplicity"))?;
    let source = raw
        .source
        .ok_or_else(|| ValidationError::missing_aggregation_field(edge_desc.as_str(), "source"))?;
    let target = raw
        .target
        .ok_or_else(|| ValidationError::missing_aggregation_field(edge_desc.as_str(), "target"))?;

    Ok(AggregationEdge {
        source,
        target,
        source_multiplicity,
    })
}

fn describe_aggregation(raw: &RawAggregation) -> String {
    format!(
        "(source='{}', target='{}')",
        raw.source.as_deref().unwrap_or("?"),
        raw.target.as_deref().unwrap_or("?")
    )
}

/// Reject cycles in the `source -> target` digraph.
///
/// Every edge's source anchors its own probe, so cycles in components
/// disconnected from the root-reachable portion of the graph are still
/// caught. The path set tracks only the current probe; because each
/// class has at most one outgoing containment edge (checked above),
/// each probe is a simple chain walk and a revisit on the current path
/// is always a genuine cycle.
fn check_acyclic(edges: &[AggregationEdge]) -> ValidationResult<()> {
    let mut parent: HashMap<&str, &str> = HashMap::new();
    for edge in edges {
        parent.insert(&edge.source, &edge.target);
    }

    for edge in edges {
        let mut path: Vec<&str> = Vec::new();
        let mut on_path: HashSet<&str> = HashSet::new();
        let mut current = edge.source.as_str();
        loop {
            if !on_path.insert(current) {
                let start = path.iter().position(|&n| n == current).unwrap_or(0);
                let mut cycle: Vec<String> =
                    path[start..].iter().map(|n| n.to_string()).collect();
                cycle.push(current.to_string());
                return Err(ValidationError::AggregationCycle { path: cycle });
            }
            path.push(current);
            match parent.get(current).copied() {
                Some(next) => current = next,
                None => break,
            }
        }
    }

    Ok(())
}
