//! Arbor Analyzer
//!
//! Structural validation of a loaded model. The analyzer is the only
//! way to obtain a [`arbor_core::Model`]: it either returns a fully
//! validated model or rejects the input with the first violated rule,
//! naming the offending class or edge.

mod error;
mod validate;

pub use error::{ValidationError, ValidationResult};
pub use validate::validate;
