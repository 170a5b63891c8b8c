//! # Movie Handlers
//!
//! Each handler translates one request into one or two record store calls
//! and classifies the outcome. Handlers keep no state between calls.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::schema::SchemaValidator;
use crate::store::{Attributes, Movie, RecordStore, StoreError, ID_FIELD};

use super::errors::{classify, RestError, RestResult};
use super::parser::SearchQuery;
use super::response::ApiResponse;

/// Handler outcome: a response, or a store failure left for the host
pub type HandlerResult = Result<ApiResponse, StoreError>;

/// Create, read, update, delete, list and search over the movie collection
#[derive(Clone)]
pub struct MovieHandlers {
    store: Arc<dyn RecordStore>,
    validator: SchemaValidator,
}

impl MovieHandlers {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            validator: SchemaValidator::movie(),
        }
    }

    /// `POST /movies`
    pub async fn create(&self, body: &[u8]) -> HandlerResult {
        classify(self.try_create(body).await)
    }

    /// `GET /movies/{id}`
    pub async fn get(&self, id: &str) -> HandlerResult {
        classify(self.try_get(id).await)
    }

    /// `PUT /movies/{id}`
    pub async fn update(&self, id: &str, body: &[u8]) -> HandlerResult {
        classify(self.try_update(id, body).await)
    }

    /// `DELETE /movies/{id}`
    pub async fn delete(&self, id: &str) -> HandlerResult {
        classify(self.try_delete(id).await)
    }

    /// `GET /movies`
    pub async fn list(&self) -> HandlerResult {
        let movies = self.store.scan_all().await?;
        Ok(ApiResponse::ok(Value::Array(
            movies.into_iter().map(Value::from).collect(),
        )))
    }

    /// `GET /movies/search/{query_params}`
    pub async fn search(&self, query_params: &str) -> HandlerResult {
        classify(self.try_search(query_params).await)
    }

    async fn try_create(&self, body: &[u8]) -> RestResult<ApiResponse> {
        let attributes = parse_body(body)?;
        self.validator.validate(&attributes)?;

        // Generated id always wins over one in the body; no collision check.
        let movie = Movie::new(Uuid::new_v4().to_string(), attributes);
        let movie = self.store.put(movie).await?;

        info!(id = movie.id(), "movie created");
        Ok(ApiResponse::created(movie.into()))
    }

    async fn try_get(&self, id: &str) -> RestResult<ApiResponse> {
        let movie = self.fetch(id).await?;
        Ok(ApiResponse::ok(movie.into()))
    }

    async fn try_update(&self, id: &str, body: &[u8]) -> RestResult<ApiResponse> {
        // Existence first: an unknown id is 404 even with a bad body.
        self.fetch(id).await?;

        let attributes = parse_body(body)?;
        self.validator.validate(&attributes)?;

        // Full replace. The path id overrides any id in the body.
        let movie = self.store.put(Movie::new(id, attributes)).await?;

        info!(id, "movie replaced");
        Ok(ApiResponse::ok(movie.into()))
    }

    async fn try_delete(&self, id: &str) -> RestResult<ApiResponse> {
        self.fetch(id).await?;
        self.store.delete(id).await?;

        info!(id, "movie deleted");
        Ok(ApiResponse::no_content())
    }

    async fn try_search(&self, query_params: &str) -> RestResult<ApiResponse> {
        let query = SearchQuery::parse(query_params)?;
        let matches = self
            .store
            .scan_filtered(&query.field, &query.value, &[ID_FIELD, query.field.as_str()])
            .await?;

        Ok(ApiResponse::ok(Value::Array(
            matches.into_iter().map(Value::Object).collect(),
        )))
    }

    async fn fetch(&self, id: &str) -> RestResult<Movie> {
        self.store.get(id).await?.ok_or(RestError::NotFound)
    }
}

/// Parse a request body into an attribute map
fn parse_body(body: &[u8]) -> RestResult<Attributes> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(attributes)) => Ok(attributes),
        Ok(_) => Err(RestError::MalformedBody("expected a JSON object".to_string())),
        Err(e) => Err(RestError::MalformedBody(e.to_string())),
    }
}
