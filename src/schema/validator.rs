//! Schema validator for incoming movie records
//!
//! Validation semantics:
//! - All required fields are present, non-null and non-empty
//! - Declared fields have the declared type
//! - Undeclared fields are tolerated and left untouched
//! - Every violation is reported, not just the first

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult, Violation};
use super::types::{FieldDef, Schema, MOVIE_SCHEMA};

/// Schema validator that enforces a fixed schema on records.
///
/// Validator does not mutate records.
/// Validation is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator {
    schema: &'static Schema,
}

impl SchemaValidator {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'static Schema) -> Self {
        Self { schema }
    }

    /// Validator for the movie schema.
    pub fn movie() -> Self {
        Self::new(&MOVIE_SCHEMA)
    }

    /// Validates a record against the schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` listing one violation per offending field, in
    /// schema declaration order.
    pub fn validate(&self, record: &Map<String, Value>) -> SchemaResult<()> {
        let violations: Vec<Violation> = self
            .schema
            .fields
            .iter()
            .filter_map(|field| check_field(field, record.get(field.name)))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError {
                schema: self.schema.name,
                violations,
            })
        }
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::movie()
    }
}

/// Checks one field, returning the violation if any.
fn check_field(field: &FieldDef, value: Option<&Value>) -> Option<Violation> {
    match value {
        None | Some(Value::Null) => field.required.then(|| Violation::missing(field.name)),
        Some(value) if !field.field_type.matches(value) => Some(Violation::type_mismatch(
            field.name,
            field.field_type.type_name(),
        )),
        Some(Value::String(s)) if s.is_empty() => {
            field.required.then(|| Violation::missing(field.name))
        }
        Some(_) => None,
    }
}
