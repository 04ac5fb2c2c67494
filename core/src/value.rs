//! The Scalar value union for class-level fields.
//!
//! Interchange documents carry every value as a string. The literal
//! strings `"true"` and `"false"` are coerced to booleans exactly once,
//! at the validation boundary; every other value stays a string and is
//! never re-interpreted downstream.

use serde::{Serialize, Serializer};
use std::fmt;

/// A scalar field value: either a coerced boolean or an opaque string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// Boolean coerced from the literal `"true"` / `"false"`.
    Bool(bool),
    /// Any other string value, carried verbatim.
    Str(String),
}

impl Scalar {
    /// Coerce a raw document value. `"true"` and `"false"` become
    /// booleans; everything else stays a string.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => Scalar::Bool(true),
            "false" => Scalar::Bool(false),
            _ => Scalar::Str(raw.to_string()),
        }
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Scalar::Bool(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as string reference if this is a Str value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_booleans() {
        assert_eq!(Scalar::coerce("true"), Scalar::Bool(true));
        assert_eq!(Scalar::coerce("false"), Scalar::Bool(false));
    }

    #[test]
    fn test_coerce_leaves_strings_alone() {
        assert_eq!(Scalar::coerce("maybe"), Scalar::Str("maybe".into()));
        // Case-sensitive: only the exact lowercase literals coerce.
        assert_eq!(Scalar::coerce("True"), Scalar::Str("True".into()));
        assert_eq!(Scalar::coerce(""), Scalar::Str("".into()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Scalar::Bool(true).as_bool(), Some(true));
        assert_eq!(Scalar::Bool(true).as_str(), None);
        assert_eq!(Scalar::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Scalar::Str("x".into()).as_bool(), None);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Scalar::Bool(true)).unwrap(), "true");
        assert_eq!(
            serde_json::to_string(&Scalar::Str("maybe".into())).unwrap(),
            "\"maybe\""
        );
    }
}
