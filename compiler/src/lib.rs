//! Arbor Compiler
//!
//! Lower a validated model into its two derived artifacts:
//! - a rooted containment tree mirroring the aggregation structure
//!   (tree builder),
//! - a per-class descriptor list, independent of tree shape
//!   (metadata projector).
//!
//! Both stages read the same [`ModelIndex`] and neither mutates shared
//! state; they are independent pure functions of the validated model.

mod error;
mod project;
mod tree;

pub use error::{CompileError, CompileResult};
pub use project::{project, ClassDescriptor, Parameter};
pub use tree::{build_tree, ContainerNode};

use arbor_core::Model;
use arbor_graph::ModelIndex;

/// The two artifacts produced by one compilation.
#[derive(Debug)]
pub struct Artifacts {
    /// Containment tree rooted at the class flagged `isRoot`.
    pub tree: ContainerNode,
    /// One descriptor per declared class, in declaration order.
    pub descriptors: Vec<ClassDescriptor>,
}

/// Compile a validated model into its containment tree and descriptor
/// list. The index is built here and discarded when compilation
/// finishes.
pub fn compile(model: &Model) -> CompileResult<Artifacts> {
    tracing::debug!(
        classes = model.classes.len(),
        edges = model.edges.len(),
        root = %model.root,
        "compiling model"
    );

    let index = ModelIndex::build(model);
    let tree = build_tree(model, &index);
    let descriptors = project(model, &index)?;

    Ok(Artifacts { tree, descriptors })
}
