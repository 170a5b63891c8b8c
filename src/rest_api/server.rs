//! # REST API Router
//!
//! Axum routes for the movie collection.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Router,
};

use super::errors::{classify, RestError};
use super::handler::{HandlerResult, MovieHandlers};

/// Shared state type
type ServerState = Arc<MovieHandlers>;

/// Path extraction outcome; a rejection is answered by the classifier
type PathParam = Result<Path<String>, PathRejection>;

/// REST API server
pub struct RestServer {
    handlers: Arc<MovieHandlers>,
}

impl RestServer {
    pub fn new(handlers: MovieHandlers) -> Self {
        Self {
            handlers: Arc::new(handlers),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route("/movies", get(list_handler).post(create_handler))
            .route("/movies/search/", get(empty_search_handler))
            .route("/movies/search/:query_params", get(search_handler))
            .route(
                "/movies/:id",
                get(get_handler).put(update_handler).delete(delete_handler),
            )
            .with_state(self.handlers)
    }
}

/// Reject an unextractable id segment with the JSON error envelope
fn invalid_id(rejection: PathRejection) -> HandlerResult {
    classify(Err(RestError::InvalidPath(rejection.body_text())))
}

/// Create record handler
async fn create_handler(State(handlers): State<ServerState>, body: Bytes) -> HandlerResult {
    handlers.create(&body).await
}

/// Get single record handler
async fn get_handler(State(handlers): State<ServerState>, id: PathParam) -> HandlerResult {
    match id {
        Ok(Path(id)) => handlers.get(&id).await,
        Err(rejection) => invalid_id(rejection),
    }
}

/// Replace record handler
async fn update_handler(
    State(handlers): State<ServerState>,
    id: PathParam,
    body: Bytes,
) -> HandlerResult {
    match id {
        Ok(Path(id)) => handlers.update(&id, &body).await,
        Err(rejection) => invalid_id(rejection),
    }
}

/// Delete record handler
async fn delete_handler(State(handlers): State<ServerState>, id: PathParam) -> HandlerResult {
    match id {
        Ok(Path(id)) => handlers.delete(&id).await,
        Err(rejection) => invalid_id(rejection),
    }
}

/// List records handler
async fn list_handler(State(handlers): State<ServerState>) -> HandlerResult {
    handlers.list().await
}

/// Exact-match search handler
async fn search_handler(
    State(handlers): State<ServerState>,
    query_params: PathParam,
) -> HandlerResult {
    match query_params {
        Ok(Path(query_params)) => handlers.search(&query_params).await,
        Err(rejection) => classify(Err(RestError::InvalidQuery(rejection.body_text()))),
    }
}

/// `/movies/search/` with nothing after the slash
async fn empty_search_handler(State(handlers): State<ServerState>) -> HandlerResult {
    handlers.search("").await
}
