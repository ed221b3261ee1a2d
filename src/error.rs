//! Failure taxonomy
//!
//! Every way a guard can reject its input is a variant of [`Failure`].
//! Composite guards wrap the failures of their children, so a failure
//! coming out of a deeply nested shape still names the field it came from:
//!
//! ```
//! use bulwark::prelude::*;
//! use serde_json::json;
//!
//! let user = object(Shape::new().field("address", object(Shape::new().field("zip", string()))));
//! let err = validate(&user, &json!({"address": {"zip": 12345}}).into()).unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Object 'address' property error: Object 'zip' property error: Expected string, got 12345"
//! );
//! assert_eq!(err.field_path(), vec!["address", "zip"]);
//! ```

use crate::value::{Kind, Value};

/// Why a guard rejected its input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Failure {
    /// The input has the wrong runtime kind for a primitive guard.
    #[error("Expected {expected}, got {actual}")]
    KindMismatch {
        /// Kind the guard accepts.
        expected: Kind,
        /// The rejected input.
        actual: Value,
    },

    /// The input is a number, but NaN.
    #[error("Expected number, got NaN")]
    NotANumber,

    /// An `array` guard received something other than a sequence.
    #[error("Expected array, got {actual}")]
    NotASequence {
        /// The rejected input.
        actual: Value,
    },

    /// An `object` or `record_of` guard received something other than a structure.
    #[error("Expected object, got {actual}")]
    NotAStructure {
        /// The rejected input.
        actual: Value,
    },

    /// A declared field of an `object` guard failed.
    #[error("Object '{field}' property error: {inner}")]
    FieldError {
        /// Name of the failing field.
        field: String,
        /// What went wrong inside the field.
        #[source]
        inner: Box<Failure>,
    },

    /// Neither branch of an `either` guard matched.
    #[error("Union error: {left} | {right}")]
    UnionExhausted {
        /// Failure of the first branch.
        #[source]
        left: Box<Failure>,
        /// Failure of the second branch.
        right: Box<Failure>,
    },

    /// A refinement predicate added with `ensure` did not hold.
    #[error("{message}")]
    Refinement {
        /// Message supplied with the predicate.
        message: String,
    },
}

impl Failure {
    pub(crate) fn kind_mismatch(expected: Kind, actual: &Value) -> Self {
        Failure::KindMismatch {
            expected,
            actual: actual.clone(),
        }
    }

    pub(crate) fn field(field: impl Into<String>, inner: Failure) -> Self {
        Failure::FieldError {
            field: field.into(),
            inner: Box::new(inner),
        }
    }

    pub(crate) fn union(left: Failure, right: Failure) -> Self {
        Failure::UnionExhausted {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Names of the nested fields leading to the innermost failure.
    ///
    /// Empty unless this is a [`Failure::FieldError`].
    pub fn field_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Failure::FieldError { field, inner } = current {
            path.push(field.as_str());
            current = &**inner;
        }
        path
    }
}
