//! HTTP-level tests for requirement code derivation.
//!
//! Exercises the full decision table through `/requirements/add` and
//! `/requirements/update/{id}`: parent-scoped auto-numbering, bare-suffix
//! qualification, verbatim dotted codes, and criteria-code qualification
//! when no parent is given.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, put_json, seed_criteria, seed_event, seed_requirement};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Auto-numbering under a parent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_code_auto_numbers_under_parent(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "P").await;
    seed_requirement(&pool, criteria_id, "P.1", None).await;

    // First child under P.1.
    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({
            "Description": "first child",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": "P.1",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["RequirementCode"], "P.1.1");
    assert_eq!(json["data"]["ParentRequirementCode"], "P.1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_auto_number_skips_deleted_suffixes(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "P").await;
    seed_requirement(&pool, criteria_id, "P.1", None).await;
    seed_requirement(&pool, criteria_id, "P.1.1", Some("P.1")).await;
    seed_requirement(&pool, criteria_id, "P.1.2", Some("P.1")).await;
    seed_requirement(&pool, criteria_id, "P.1.5", Some("P.1")).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({
            "Description": "next",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": "P.1",
        }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["RequirementCode"], "P.1.6");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_auto_number_across_digit_boundary(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "P").await;
    seed_requirement(&pool, criteria_id, "P.1", None).await;
    seed_requirement(&pool, criteria_id, "P.1.9", Some("P.1")).await;
    seed_requirement(&pool, criteria_id, "P.1.10", Some("P.1")).await;

    // The numeric max (10) wins even though "P.1.9" sorts last
    // lexicographically.
    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({
            "Description": "eleventh",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": "P.1",
        }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["RequirementCode"], "P.1.11");
}

// ---------------------------------------------------------------------------
// Supplied codes under a parent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bare_code_qualified_with_parent(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "P").await;
    seed_requirement(&pool, criteria_id, "P.1", None).await;

    let (_, code) = seed_requirement(&pool, criteria_id, "3", Some("P.1")).await;
    assert_eq!(code, "P.1.3");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dotted_code_stored_verbatim(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "P").await;
    seed_requirement(&pool, criteria_id, "P.1", None).await;

    let (_, code) = seed_requirement(&pool, criteria_id, "X.9", Some("P.1")).await;
    assert_eq!(code, "X.9");
}

// ---------------------------------------------------------------------------
// No parent: criteria-code qualification
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bare_code_qualified_with_criteria(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "CUR.4").await;

    let (_, code) = seed_requirement(&pool, criteria_id, "2", None).await;
    assert_eq!(code, "CUR.4.2");

    let (_, code) = seed_requirement(&pool, criteria_id, "Z.1", None).await;
    assert_eq!(code, "Z.1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_end_to_end_first_requirement(pool: PgPool) {
    // Event -> Area -> Criteria -> Requirement, the wizard's manual path.
    let event_id = seed_event(&pool, "E1").await;
    let area_id = common::seed_area(&pool, event_id, "A1").await;
    let criteria_id = seed_criteria(&pool, event_id, Some(area_id), "A1.C1").await;

    let (_, code) = seed_requirement(&pool, criteria_id, "1", None).await;
    assert_eq!(code, "A1.C1.1");
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_code_without_parent_rejected(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "C1").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({
            "RequirementCode": "",
            "Description": "no code",
            "CriteriaID": criteria_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Requirement code is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_description_rejected(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "C1").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({"RequirementCode": "1", "CriteriaID": criteria_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Description is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_criteria_id_rejected(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({"RequirementCode": "1", "Description": "d"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "CriteriaID is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_criteria_rejected(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({"RequirementCode": "1", "Description": "d", "CriteriaID": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_parent_code_rejected(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "C1").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/requirements/add",
        serde_json::json!({
            "Description": "d",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": "C1.404",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Parent requirement not found: C1.404");
}

// ---------------------------------------------------------------------------
// Update flow shares the derivation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rederives_code(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "C1").await;
    seed_requirement(&pool, criteria_id, "C1.1", None).await;
    let (id, _) = seed_requirement(&pool, criteria_id, "C1.2", None).await;

    // Reparent under C1.1 with a bare suffix.
    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/requirements/update/{id}"),
        serde_json::json!({
            "RequirementCode": "7",
            "Description": "moved",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": "C1.1",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["RequirementCode"], "C1.1.7");
    assert_eq!(json["data"]["ParentRequirementCode"], "C1.1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_empty_code_auto_numbers(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "C1").await;
    seed_requirement(&pool, criteria_id, "C1.1", None).await;
    seed_requirement(&pool, criteria_id, "C1.1.1", Some("C1.1")).await;
    let (id, _) = seed_requirement(&pool, criteria_id, "C1.9", None).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/requirements/update/{id}"),
        serde_json::json!({
            "RequirementCode": "",
            "Description": "moved",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": "C1.1",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["RequirementCode"], "C1.1.2");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_cycle(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "C1").await;
    let (parent_id, _) = seed_requirement(&pool, criteria_id, "C1.1", None).await;
    seed_requirement(&pool, criteria_id, "C1.1.1", Some("C1.1")).await;

    // Making C1.1 a child of its own child must be rejected.
    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/requirements/update/{parent_id}"),
        serde_json::json!({
            "RequirementCode": "C1.1",
            "Description": "looped",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": "C1.1.1",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Cycle detected"), "message: {message}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_self_parent(pool: PgPool) {
    let event_id = seed_event(&pool, "E1").await;
    let criteria_id = seed_criteria(&pool, event_id, None, "C1").await;
    let (id, _) = seed_requirement(&pool, criteria_id, "C1.1", None).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/requirements/update/{id}"),
        serde_json::json!({
            "RequirementCode": "C1.1",
            "Description": "self",
            "CriteriaID": criteria_id,
            "ParentRequirementCode": "C1.1",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
