//! Schema type definitions
//!
//! Supported types:
//! - string: non-empty UTF-8 string

use serde_json::Value;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
        }
    }

    /// Whether a JSON value has this type
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
        }
    }
}

/// A single field of a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Attribute name in the record
    pub name: &'static str,
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present and non-empty
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub const fn required_string(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            required: true,
        }
    }
}

/// An ordered set of field definitions.
///
/// Field order is the order in which violations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl Schema {
    /// Names of all declared fields, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// The movie record schema. Every field is a required string.
pub const MOVIE_SCHEMA: Schema = Schema {
    name: "movie",
    fields: &[
        FieldDef::required_string("movie_name"),
        FieldDef::required_string("details"),
        FieldDef::required_string("genre"),
        FieldDef::required_string("actor"),
        FieldDef::required_string("release_date"),
    ],
};
