//! HTTP-level tests for the bulk delete endpoints.
//!
//! All four bulk endpoints share the same contract: the ID list must be
//! present, an array, and non-empty (400 otherwise); zero matched rows is
//! 404; success reports `{success: true, deletedCount}`.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_json, get, post_json, seed_criteria, seed_event,
    seed_requirement,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_delete_requirements_round_trip(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "C1").await;
    let (r1, _) = seed_requirement(&pool, criteria_id, "C1.1", None).await;
    let (r2, _) = seed_requirement(&pool, criteria_id, "C1.2", None).await;
    let (r3, _) = seed_requirement(&pool, criteria_id, "C1.3", None).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/delete",
        serde_json::json!({"requirementIds": [r1, r2, r3]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deletedCount"], 3);

    // Gone from subsequent listings.
    let response = get(
        build_test_app(pool),
        &format!("/requirements/event/{event_id}"),
    )
    .await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_delete_requirements_validation(pool: PgPool) {
    for (body, expected_message) in [
        (serde_json::json!({}), "requirementIds is required"),
        (
            serde_json::json!({"requirementIds": null}),
            "requirementIds is required",
        ),
        (
            serde_json::json!({"requirementIds": "1,2"}),
            "requirementIds must be an array of IDs",
        ),
        (
            serde_json::json!({"requirementIds": []}),
            "requirementIds must not be empty",
        ),
        (
            serde_json::json!({"requirementIds": [1, "two"]}),
            "requirementIds must contain integer IDs",
        ),
    ] {
        let response = post_json(build_test_app(pool.clone()), "/requirements/delete", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], expected_message);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_delete_requirements_nothing_matched(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/requirements/delete",
        serde_json::json!({"requirementIds": [999997, 999998, 999999]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

// ---------------------------------------------------------------------------
// Criteria (DELETE verb with a body)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_delete_criteria(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let c1 = seed_criteria(&pool, event_id, None, "C1").await;
    let c2 = seed_criteria(&pool, event_id, None, "C2").await;
    seed_requirement(&pool, c1, "C1.1", None).await;

    let response = delete_json(
        build_test_app(pool.clone()),
        "/criteria/delete",
        serde_json::json!({"criteriaIds": [c1, c2]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deletedCount"], 2);

    // Owned requirements went with the criteria.
    let response = get(
        build_test_app(pool),
        &format!("/requirements/event/{event_id}"),
    )
    .await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_delete_events(pool: PgPool) {
    let e1 = seed_event(&pool, "E1").await;
    let e2 = seed_event(&pool, "E2").await;

    let response = delete_json(
        build_test_app(pool.clone()),
        "/events/delete",
        serde_json::json!({"eventIds": [e1, e2]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deletedCount"], 2);

    let response = get(build_test_app(pool), "/events").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Office heads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_delete_office_heads(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/offices",
        serde_json::json!({"OfficeName": "Registrar"}),
    )
    .await;
    let office_id = body_json(response).await["data"]["OfficeID"].as_i64().unwrap();

    let mut head_ids = Vec::new();
    for i in 0..2 {
        let response = post_json(
            build_test_app(pool.clone()),
            "/office-heads",
            serde_json::json!({
                "OfficeID": office_id,
                "HeadName": format!("Head {i}"),
                "Email": format!("head{i}@example.edu"),
            }),
        )
        .await;
        head_ids.push(body_json(response).await["data"]["HeadID"].as_i64().unwrap());
    }

    let response = post_json(
        build_test_app(pool.clone()),
        "/office-heads/delete",
        serde_json::json!({"headIds": head_ids}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deletedCount"], 2);

    let response = get(build_test_app(pool), "/office-heads").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
