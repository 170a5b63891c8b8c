//! # REST API Errors
//!
//! Error types for the movie handlers, and the classifier that turns the
//! client-correctable ones into responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::schema::SchemaError;
use crate::store::StoreError;

use super::response::ApiResponse;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Record violates the schema
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Request body is not a JSON object
    #[error("invalid request body format: {0}")]
    MalformedBody(String),

    /// Referenced id does not exist
    #[error("not found")]
    NotFound,

    /// Search path parameter missing or malformed
    #[error("invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Path segment could not be extracted (e.g. not valid UTF-8)
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Record store failure, never recovered by a handler
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidPath(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Maps a handler outcome to a response.
///
/// Validation, malformed input and not-found become 4xx responses. A store
/// failure is handed back unchanged for the hosting layer to deal with.
pub fn classify(result: RestResult<ApiResponse>) -> Result<ApiResponse, StoreError> {
    let err = match result {
        Ok(response) => return Ok(response),
        Err(RestError::Store(e)) => return Err(e),
        Err(err) => err,
    };

    warn!(status = err.status_code().as_u16(), error = %err, "request rejected");

    let body = match &err {
        RestError::Validation(schema_err) => json!({ "errors": schema_err.messages() }),
        other => json!({ "error": other.to_string() }),
    };
    Ok(ApiResponse::json(err.status_code(), body))
}

/// Unrecovered store failures become an opaque 500. The body carries no
/// detail; the cause goes to the log only.
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        error!(error = %self, "unhandled store failure");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
