//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the same router + middleware stack production uses and drives it
//! with `tower::ServiceExt::oneshot`, so no TCP listener is needed.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use accredo_api::config::ServerConfig;
use accredo_api::router::build_app_router;
use accredo_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors the router construction in `main.rs` so
/// tests exercise the same stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seeding shortcuts (per-entity create through the API)
// ---------------------------------------------------------------------------

/// Create an event through the API and return its ID.
pub async fn seed_event(pool: &PgPool, code: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/events",
        serde_json::json!({"EventCode": code, "EventName": format!("{code} cycle")}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["EventID"].as_i64().unwrap()
}

/// Create an area through the API and return its ID.
pub async fn seed_area(pool: &PgPool, event_id: i64, code: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/areas/add",
        serde_json::json!({
            "EventChildID": event_id,
            "AreaCode": code,
            "AreaName": format!("Area {code}"),
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["AreaID"].as_i64().unwrap()
}

/// Create a criteria through the API and return its ID.
pub async fn seed_criteria(pool: &PgPool, event_id: i64, area_id: Option<i64>, code: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/criteria/add",
        serde_json::json!({
            "EventID": event_id,
            "AreaID": area_id,
            "CriteriaCode": code,
            "CriteriaName": format!("Criteria {code}"),
            "Description": "seeded",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["CriteriaID"].as_i64().unwrap()
}

/// Create a requirement through the API and return `(id, code)`.
pub async fn seed_requirement(
    pool: &PgPool,
    criteria_id: i64,
    code: &str,
    parent_code: Option<&str>,
) -> (i64, String) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({
            "RequirementCode": code,
            "Description": "seeded",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": parent_code,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["data"]["RequirementID"].as_i64().unwrap(),
        json["data"]["RequirementCode"].as_str().unwrap().to_string(),
    )
}
