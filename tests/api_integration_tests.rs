//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lru_kv::{api::create_router, cache::CacheStore, AppState};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(capacity: usize) -> Router {
    let cache = CacheStore::new(capacity).unwrap();
    let state = AppState::new(cache);
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "text/plain")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn stats(app: &Router) -> Value {
    let (status, body) = send(app, "GET", "/cache/stats", "").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

// == PUT Endpoint Tests ==

#[tokio::test]
async fn test_put_endpoint_success() {
    let app = create_test_app(100);

    let (status, body) = send(&app, "PUT", "/test_key", "test_value").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Value stored successfully");
}

#[tokio::test]
async fn test_put_empty_body_rejected() {
    let app = create_test_app(100);

    let (status, body) = send(&app, "PUT", "/test_key", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Value cannot be empty");

    let (status, _) = send(&app, "GET", "/test_key", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_non_utf8_body_rejected() {
    let app = create_test_app(100);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/bin")
                .body(Body::from(vec![0xff, 0xfe, 0xfd]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_overwrites_value() {
    let app = create_test_app(100);

    send(&app, "PUT", "/k", "v1").await;
    send(&app, "PUT", "/k", "v2").await;

    let (status, body) = send(&app, "GET", "/k", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "v2");
    assert_eq!(stats(&app).await["size"], 1);
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app(100);

    let (status, _) = send(&app, "PUT", "/get_key", "get_value").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/get_key", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "get_value");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app(100);

    let (status, body) = send(&app, "GET", "/nonexistent_key", "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Key not found");
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let app = create_test_app(100);

    send(&app, "PUT", "/delete_key", "delete_value").await;

    let (status, body) = send(&app, "DELETE", "/delete_key", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Key removed successfully");

    // Verify it's gone
    let (status, _) = send(&app, "GET", "/delete_key", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_endpoint_not_found() {
    let app = create_test_app(100);

    let (status, body) = send(&app, "DELETE", "/nonexistent_key", "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Key not found");
}

// == CLEAR Endpoint Tests ==

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app(100);

    send(&app, "PUT", "/a", "1").await;
    send(&app, "PUT", "/b", "2").await;

    let (status, body) = send(&app, "DELETE", "/", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Cache cleared successfully");

    assert_eq!(stats(&app).await["size"], 0);
    let (status, _) = send(&app, "GET", "/a", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Clearing an empty cache still succeeds
    let (status, _) = send(&app, "DELETE", "/", "").await;
    assert_eq!(status, StatusCode::OK);
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app(3);

    send(&app, "PUT", "/stats_key", "stats_value").await;
    send(&app, "GET", "/stats_key", "").await; // hit
    send(&app, "GET", "/nonexistent", "").await; // miss

    let json = stats(&app).await;

    assert_eq!(json["size"].as_u64().unwrap(), 1);
    assert_eq!(json["capacity"].as_u64().unwrap(), 3);
    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["evictions"].as_u64().unwrap(), 0);
    assert!(json.get("hit_rate").is_some());
}

// == Eviction via API ==

#[tokio::test]
async fn test_lru_eviction_via_api() {
    let app = create_test_app(2);

    send(&app, "PUT", "/A", "1").await;
    send(&app, "PUT", "/B", "2").await;
    send(&app, "GET", "/A", "").await;
    send(&app, "PUT", "/C", "3").await;

    let (status, _) = send(&app, "GET", "/B", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/A", "").await;
    assert_eq!(body, "1");
    let (_, body) = send(&app, "GET", "/C", "").await;
    assert_eq!(body, "3");

    let json = stats(&app).await;
    assert_eq!(json["size"], 2);
    assert_eq!(json["evictions"], 1);
}

#[tokio::test]
async fn test_capacity_one_scenario_via_api() {
    let app = create_test_app(1);

    send(&app, "PUT", "/K", "v1").await;
    assert_eq!(send(&app, "GET", "/K", "").await.1, "v1");

    send(&app, "PUT", "/K", "v2").await;
    assert_eq!(send(&app, "GET", "/K", "").await.1, "v2");
    assert_eq!(stats(&app).await["size"], 1);

    send(&app, "PUT", "/J", "x").await;
    assert_eq!(send(&app, "GET", "/K", "").await.0, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, "GET", "/J", "").await.1, "x");
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(100);

    let (status, body) = send(&app, "GET", "/cache/health", "").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_unknown_nested_path_not_found() {
    let app = create_test_app(100);

    let (status, _) = send(&app, "GET", "/a/b/c", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
