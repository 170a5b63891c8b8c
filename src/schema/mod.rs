//! Schema Validator subsystem
//!
//! Schemas are enforced at write time only; the record store itself holds
//! no constraints.
//!
//! # Design Principles
//!
//! - Checked on every create and update
//! - All violations collected in one pass
//! - No coercion
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult, Violation, ViolationKind};
pub use types::{FieldDef, FieldType, Schema, MOVIE_SCHEMA};
pub use validator::SchemaValidator;
