//! Schema error types
//!
//! A failed validation carries every violated constraint, in schema field
//! order, never just the first one.

use std::fmt;

use thiserror::Error;

/// What went wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Field absent, null, or an empty string
    Missing,
    /// Field present with the wrong JSON type
    TypeMismatch { expected: &'static str },
}

/// One violated field constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field name (e.g. "movie_name")
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::Missing,
        }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::TypeMismatch { expected },
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{} is a required field", self.field),
            ViolationKind::TypeMismatch { expected } => {
                write!(f, "{} must be a `{}` type", self.field, expected)
            }
        }
    }
}

/// Validation failure with all violations found in a single pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{count} validation error(s) against schema '{schema}'", count = .violations.len())]
pub struct SchemaError {
    /// Schema the record was checked against
    pub schema: &'static str,
    /// Never empty
    pub violations: Vec<Violation>,
}

impl SchemaError {
    /// Human-readable message per violation, in schema field order
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
