//! Compiler error types.

use thiserror::Error;

/// Errors that can occur while deriving artifacts from a validated
/// model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    /// A non-root class has no containment edge to split a cardinality
    /// from. A validated model cannot trigger this; seeing it means the
    /// analyzer and the projector disagree about an invariant.
    #[error("class '{class}' has no containment edge to derive cardinality from")]
    MissingCardinality { class: String },
}

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
