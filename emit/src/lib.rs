//! Arbor Emitters
//!
//! Serialize the compiler's artifacts to their external
//! representations: the containment tree as an indented XML document,
//! the descriptor list as pretty-printed JSON. File-writing variants
//! report I/O failures without corrupting the in-memory artifacts.

mod error;
mod json;
mod xml;

pub use error::{EmitError, EmitResult};
pub use json::{render_descriptors, write_descriptors_file};
pub use xml::{render_tree, write_tree_file};
