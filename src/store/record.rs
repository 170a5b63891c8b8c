//! Movie record representation
//!
//! A record is an ordered JSON object that always carries a string `id`.
//! Attributes outside the movie schema are kept as submitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::StoreError;

/// Attribute map of a record, or of a projection of one
pub type Attributes = Map<String, Value>;

/// Name of the key attribute
pub const ID_FIELD: &str = "id";

/// A stored movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Attributes", into = "Attributes")]
pub struct Movie {
    attributes: Attributes,
}

impl Movie {
    /// Builds a record from submitted attributes, forcing `id` to the given
    /// value. Any `id` already present in `attributes` is replaced.
    pub fn new(id: impl Into<String>, mut attributes: Attributes) -> Self {
        attributes.insert(ID_FIELD.to_string(), Value::String(id.into()));
        Self { attributes }
    }

    /// The record key
    pub fn id(&self) -> &str {
        self.attributes
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Get a single attribute
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Keep only the named attributes. Names missing from the record are
    /// skipped, not emitted as null.
    pub fn project(&self, fields: &[&str]) -> Attributes {
        fields
            .iter()
            .filter_map(|f| self.attributes.get(*f).map(|v| (f.to_string(), v.clone())))
            .collect()
    }
}

impl TryFrom<Attributes> for Movie {
    type Error = StoreError;

    fn try_from(attributes: Attributes) -> Result<Self, Self::Error> {
        match attributes.get(ID_FIELD) {
            Some(Value::String(id)) if !id.is_empty() => Ok(Self { attributes }),
            _ => Err(StoreError::codec("record has no string 'id' attribute")),
        }
    }
}

impl From<Movie> for Attributes {
    fn from(movie: Movie) -> Self {
        movie.attributes
    }
}

impl From<Movie> for Value {
    fn from(movie: Movie) -> Self {
        Value::Object(movie.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_new_overrides_submitted_id() {
        let movie = Movie::new("path-id", attrs(json!({"id": "body-id", "movie_name": "Dune"})));
        assert_eq!(movie.id(), "path-id");
        assert_eq!(movie.get("movie_name"), Some(&json!("Dune")));
    }

    #[test]
    fn test_projection_skips_absent_fields() {
        let movie = Movie::new("m1", attrs(json!({"movie_name": "Dune", "genre": "Sci-Fi"})));
        let projected = movie.project(&["id", "movie_name", "rating"]);
        assert_eq!(Value::Object(projected), json!({"id": "m1", "movie_name": "Dune"}));
    }

    #[test]
    fn test_try_from_requires_id() {
        assert!(Movie::try_from(attrs(json!({"movie_name": "Dune"}))).is_err());
        assert!(Movie::try_from(attrs(json!({"id": 7}))).is_err());
        assert!(Movie::try_from(attrs(json!({"id": "m1"}))).is_ok());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let movie = Movie::new("m1", attrs(json!({"movie_name": "Dune"})));
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], "m1");
        assert_eq!(json["movie_name"], "Dune");
    }
}
