//! Analyzer error types.

use thiserror::Error;

/// Errors that can occur during model validation.
///
/// Validation is fail-fast: the first violated rule is reported and the
/// compilation aborts. Each variant carries enough context to name the
/// offending class or edge.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The document declares no classes at all.
    #[error("model declares no classes")]
    NoClasses,

    /// Zero or more than one class is flagged `isRoot="true"`.
    #[error("expected exactly one root class, found {count}")]
    RootCountInvalid { count: usize },

    /// A class or attribute element lacks a required field.
    #[error("{element} is missing required attribute '{field}'")]
    MissingRequiredAttribute {
        element: String,
        field: &'static str,
    },

    /// A class name repeats in the model, or an attribute name repeats
    /// within one class.
    #[error("duplicate name '{name}' in {scope}")]
    DuplicateName { name: String, scope: String },

    /// An aggregation element lacks a required field.
    #[error("aggregation {edge} is missing required field '{field}'")]
    MissingAggregationField { edge: String, field: &'static str },

    /// An aggregation contains a class in itself.
    #[error("aggregation source and target are both '{class}'")]
    SelfAggregation { class: String },

    /// A class is the source of more than one aggregation, which would
    /// give it two containment parents.
    #[error("class '{class}' is contained by more than one parent")]
    DuplicateContainment { class: String },

    /// Following containment edges revisits a class on the current
    /// path.
    #[error("aggregation cycle detected: {}", .path.join(" -> "))]
    AggregationCycle { path: Vec<String> },
}

impl ValidationError {
    pub fn missing_attribute(element: impl Into<String>, field: &'static str) -> Self {
        Self::MissingRequiredAttribute {
            element: element.into(),
            field,
        }
    }

    pub fn duplicate_name(name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::DuplicateName {
            name: name.into(),
            scope: scope.into(),
        }
    }

    pub fn missing_aggregation_field(edge: impl Into<String>, field: &'static str) -> Self {
        Self::MissingAggregationField {
            edge: edge.into(),
            field,
        }
    }
}

/// Result type for analyzer operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
