//! Arbor Loader
//!
//! Reads a class-model interchange document into a [`RawModel`].
//! The loader does no interpretation: every attribute value is carried
//! as the string found in the document, missing fields load as `None`,
//! and the analyzer decides what is well-formed.

mod error;
mod xml;

pub use error::{LoadError, LoadResult};
pub use xml::{load_file, parse_model};
