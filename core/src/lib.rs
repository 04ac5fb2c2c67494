//! Arbor Core Types
//!
//! This crate provides the foundational types used throughout the arbor
//! compiler:
//! - Raw model structures as read from the interchange document (RawModel)
//! - Validated model structures (Model, ClassNode, AggregationEdge)
//! - The Scalar value union (boolean | string, decided once at validation)
//! - Multiplicity range parsing

mod model;
mod raw;
mod value;

pub use model::*;
pub use raw::*;
pub use value::*;
