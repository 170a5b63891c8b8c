//! # Search Parameter Parser
//!
//! Search receives its single parameter embedded in a path segment as
//! `key=value`, e.g. `/movies/search/movie_name=Dune`.

use super::errors::{RestError, RestResult};

/// The only field search accepts
pub const SEARCH_FIELD: &str = "movie_name";

/// Parsed search parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Field to match on
    pub field: String,
    /// Exact value to match
    pub value: String,
}

impl SearchQuery {
    /// Parse a `key=value` path segment.
    ///
    /// The value is everything after the first `=`, so it may itself
    /// contain `=`.
    pub fn parse(segment: &str) -> RestResult<Self> {
        let (key, value) = segment.split_once('=').ok_or_else(|| {
            RestError::InvalidQuery(format!("expected '{}=<value>'", SEARCH_FIELD))
        })?;

        let key = key.trim();
        if key != SEARCH_FIELD {
            return Err(RestError::InvalidQuery(format!(
                "unsupported search field '{}'",
                key
            )));
        }

        if value.is_empty() {
            return Err(RestError::InvalidQuery(format!(
                "{} cannot be empty",
                SEARCH_FIELD
            )));
        }

        Ok(Self {
            field: key.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie_name() {
        let query = SearchQuery::parse("movie_name=Dune").unwrap();
        assert_eq!(query.field, "movie_name");
        assert_eq!(query.value, "Dune");
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let query = SearchQuery::parse("movie_name=a=b").unwrap();
        assert_eq!(query.value, "a=b");
    }

    #[test]
    fn test_value_is_case_and_space_preserving() {
        let query = SearchQuery::parse("movie_name=Dune Part Two").unwrap();
        assert_eq!(query.value, "Dune Part Two");
    }

    #[test]
    fn test_missing_separator_rejected() {
        assert!(matches!(
            SearchQuery::parse("Dune"),
            Err(RestError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            SearchQuery::parse("genre=Drama"),
            Err(RestError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_empty_value_rejected() {
        assert!(matches!(
            SearchQuery::parse("movie_name="),
            Err(RestError::InvalidQuery(_))
        ));
    }
}
