//! Movie Handler Tests
//!
//! End-to-end behavior of the handlers against the in-memory store:
//! - Create assigns unique ids and returns the stored record
//! - Validation reports every missing field
//! - Update replaces instead of merging
//! - Delete re-checks existence
//! - Search matches exactly

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::StatusCode;
use moviedb::rest_api::MovieHandlers;
use moviedb::store::InMemoryStore;
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (Arc<InMemoryStore>, MovieHandlers) {
    let store = Arc::new(InMemoryStore::new());
    let handlers = MovieHandlers::new(store.clone());
    (store, handlers)
}

fn movie(name: &str) -> Value {
    json!({
        "movie_name": name,
        "details": "A film",
        "genre": "Sci-Fi",
        "actor": "Zendaya",
        "release_date": "2024-03-01"
    })
}

fn body(value: &Value) -> Vec<u8> {
    value.to_string().into_bytes()
}

async fn create(handlers: &MovieHandlers, record: &Value) -> String {
    let response = handlers.create(&body(record)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json_body().unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

// =============================================================================
// Create
// =============================================================================

/// Every create yields a fresh, non-empty id.
#[tokio::test]
async fn test_create_generates_unique_ids() {
    let (store, handlers) = setup();

    let mut ids = HashSet::new();
    for i in 0..50 {
        let id = create(&handlers, &movie(&format!("Film {}", i))).await;
        assert!(!id.is_empty());
        assert!(ids.insert(id), "duplicate id generated");
    }
    assert_eq!(store.len(), 50);
}

/// The created body is the full stored record.
#[tokio::test]
async fn test_create_returns_full_record() {
    let (_store, handlers) = setup();
    let response = handlers.create(&body(&movie("Dune"))).await.unwrap();

    let created = response.json_body().unwrap();
    for field in ["movie_name", "details", "genre", "actor", "release_date"] {
        assert_eq!(created[field], movie("Dune")[field]);
    }
    assert!(created["id"].is_string());
    assert_eq!(response.header("content-type"), Some("application/json"));
}

/// One message per missing field, not just the first.
#[tokio::test]
async fn test_create_reports_every_missing_field() {
    let (store, handlers) = setup();
    let response = handlers
        .create(&body(&json!({"movie_name": "Dune", "genre": "Sci-Fi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json_body().unwrap(),
        json!({"errors": [
            "details is a required field",
            "actor is a required field",
            "release_date is a required field"
        ]})
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_create_with_malformed_body() {
    let (store, handlers) = setup();
    let response = handlers.create(b"{not json").await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = response.json_body().unwrap()["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.starts_with("invalid request body format: "));
    assert!(store.is_empty());
}

// =============================================================================
// Read
// =============================================================================

/// Create then read returns the same record.
#[tokio::test]
async fn test_round_trip() {
    let (_store, handlers) = setup();
    let created = handlers.create(&body(&movie("Arrival"))).await.unwrap();
    let id = created.json_body().unwrap()["id"].as_str().unwrap().to_string();

    let read = handlers.get(&id).await.unwrap();
    assert_eq!(read.status(), StatusCode::OK);
    assert_eq!(read.json_body(), created.json_body());
}

#[tokio::test]
async fn test_unknown_id_is_404_everywhere() {
    let (_store, handlers) = setup();
    let not_found = json!({"error": "not found"});

    let read = handlers.get("missing").await.unwrap();
    let update = handlers.update("missing", &body(&movie("X"))).await.unwrap();
    let delete = handlers.delete("missing").await.unwrap();

    for response in [read, update, delete] {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.json_body().unwrap(), not_found);
    }
}

// =============================================================================
// Update
// =============================================================================

/// Fields outside the schema do not survive a replace.
#[tokio::test]
async fn test_update_replaces_not_merges() {
    let (_store, handlers) = setup();
    let mut original = movie("Dune");
    original["rating"] = json!("PG-13");
    let id = create(&handlers, &original).await;

    let response = handlers
        .update(&id, &body(&movie("Dune: Part One")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = handlers.get(&id).await.unwrap().json_body().unwrap();
    assert_eq!(stored["movie_name"], "Dune: Part One");
    assert_eq!(stored["id"], json!(id));
    assert!(stored.get("rating").is_none());
}

#[tokio::test]
async fn test_update_validation_and_malformed_body() {
    let (_store, handlers) = setup();
    let id = create(&handlers, &movie("Dune")).await;

    let invalid = handlers
        .update(&id, &body(&json!({"movie_name": ""})))
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    assert_eq!(invalid.json_body().unwrap()["errors"].as_array().unwrap().len(), 5);

    let malformed = handlers.update(&id, b"nope").await.unwrap();
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert!(malformed.json_body().unwrap()["error"].is_string());

    // Record untouched by the rejected updates
    let stored = handlers.get(&id).await.unwrap().json_body().unwrap();
    assert_eq!(stored["movie_name"], "Dune");
}

// =============================================================================
// Delete
// =============================================================================

/// Delete, then read and delete again are both 404.
#[tokio::test]
async fn test_delete_then_read_and_delete_again() {
    let (store, handlers) = setup();
    let id = create(&handlers, &movie("Heat")).await;

    let deleted = handlers.delete(&id).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert!(deleted.body().is_empty());
    assert!(deleted.headers().is_empty());
    assert!(store.is_empty());

    assert_eq!(handlers.get(&id).await.unwrap().status(), StatusCode::NOT_FOUND);
    assert_eq!(handlers.delete(&id).await.unwrap().status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// List and Search
// =============================================================================

#[tokio::test]
async fn test_list_returns_every_record() {
    let (_store, handlers) = setup();
    let empty = handlers.list().await.unwrap();
    assert_eq!(empty.json_body().unwrap(), json!([]));

    let a = create(&handlers, &movie("Alien")).await;
    let b = create(&handlers, &movie("Aliens")).await;

    let listed = handlers.list().await.unwrap().json_body().unwrap();
    let ids: HashSet<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, HashSet::from([a, b]));
}

/// "Dune" does not match "Dune Part Two".
#[tokio::test]
async fn test_search_is_exact_match() {
    let (_store, handlers) = setup();
    let dune = create(&handlers, &movie("Dune")).await;
    create(&handlers, &movie("Dune Part Two")).await;

    let response = handlers.search("movie_name=Dune").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json_body().unwrap(),
        json!([{"id": dune, "movie_name": "Dune"}])
    );
}

#[tokio::test]
async fn test_search_without_matches_is_empty_array() {
    let (_store, handlers) = setup();
    create(&handlers, &movie("Dune")).await;

    let response = handlers.search("movie_name=dune").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json_body().unwrap(), json!([]));
}

#[tokio::test]
async fn test_search_with_malformed_parameter_is_400() {
    let (_store, handlers) = setup();

    for segment in ["Dune", "genre=Drama", "movie_name="] {
        let response = handlers.search(segment).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "segment {}", segment);
        assert!(response.json_body().unwrap()["error"].is_string());
    }
}
