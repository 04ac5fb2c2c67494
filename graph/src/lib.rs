//! Arbor Graph Index
//!
//! Lookup structures over a validated model, shared read-only by the
//! tree builder and the metadata projector.

mod index;

pub use index::ModelIndex;
