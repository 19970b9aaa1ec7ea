// ABOUTME: Integration tests for the cooking event route handlers
// ABOUTME: Tests the five CRUD endpoints, validation failures, and summary projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Julia Kitchen Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use julia_api_server::database::Database;
use julia_api_server::routes::events::EventRoutes;

use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

// ============================================================================
// Test Helpers
// ============================================================================

async fn setup_router() -> axum::Router {
    let database = Database::new("sqlite::memory:").await.unwrap();
    EventRoutes::routes(Arc::new(database))
}

fn dinner_body() -> Value {
    json!({
        "recipeId": 1,
        "dateOfEvent": "2025-06-01T18:30:00Z",
        "notes": [
            "this recipe is good",
            "i substituted sugar for salt"
        ],
        "rating": 4.5
    })
}

async fn create_event(router: &axum::Router, body: &Value) -> Value {
    let response = AxumTestRequest::post("/api/v1/events")
        .json(body)
        .send(router.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_event() {
    let router = setup_router().await;

    let event = create_event(&router, &dinner_body()).await;

    assert_eq!(event["recipeId"], 1);
    assert_eq!(event["revision"], 0);
    assert_eq!(event["rating"], 4.5);
    assert_eq!(event["notes"].as_array().unwrap().len(), 2);
    assert!(event["id"].is_string());
    // The timestamp is serialized as text
    assert_eq!(event["dateOfEvent"], "2025-06-01T18:30:00Z");
}

#[tokio::test]
async fn test_create_without_recipe_id_fails_validation() {
    let router = setup_router().await;

    let response = AxumTestRequest::post("/api/v1/events")
        .json(&json!({ "dateOfEvent": "2025-06-01T18:30:00Z" }))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("recipeId"));
}

#[tokio::test]
async fn test_create_without_rating_omits_it_from_output() {
    let router = setup_router().await;

    let event = create_event(
        &router,
        &json!({
            "recipeId": 2,
            "dateOfEvent": "2025-06-01T18:30:00Z"
        }),
    )
    .await;

    assert!(event.get("rating").is_none());
    assert_eq!(event["notes"], json!([]));
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_returns_summary_projection_only() {
    let router = setup_router().await;

    for recipe_id in [1, 2, 3] {
        create_event(
            &router,
            &json!({
                "recipeId": recipe_id,
                "dateOfEvent": "2025-06-01T18:30:00Z"
            }),
        )
        .await;
    }

    let response = AxumTestRequest::get("/api/v1/events").send(router).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let summaries: Vec<Value> = response.json();
    assert_eq!(summaries.len(), 3);

    for summary in &summaries {
        let keys: Vec<&str> = summary.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"id"));
        assert!(keys.contains(&"recipeId"));
    }
}

// ============================================================================
// Get Tests
// ============================================================================

#[tokio::test]
async fn test_get_round_trips_the_created_document() {
    let router = setup_router().await;

    let created = create_event(&router, &dinner_body()).await;
    let id = created["id"].as_str().unwrap();

    let response = AxumTestRequest::get(&format!("/api/v1/events/{id}"))
        .send(router)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched: Value = response.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let router = setup_router().await;

    let response = AxumTestRequest::get("/api/v1/events/00000000-0000-4000-8000-000000000000")
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_rating_leaves_other_fields_untouched() {
    let router = setup_router().await;

    let created = create_event(&router, &dinner_body()).await;
    let id = created["id"].as_str().unwrap();

    let response = AxumTestRequest::patch(&format!("/api/v1/events/{id}"))
        .json(&json!({ "rating": 2 }))
        .send(router)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let updated: Value = response.json();
    assert_eq!(updated["rating"], 2.0);
    assert_eq!(updated["revision"], 1);
    assert_eq!(updated["recipeId"], created["recipeId"]);
    assert_eq!(updated["dateOfEvent"], created["dateOfEvent"]);
    assert_eq!(updated["notes"], created["notes"]);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let router = setup_router().await;

    let response = AxumTestRequest::patch("/api/v1/events/00000000-0000-4000-8000-000000000000")
        .json(&json!({ "rating": 1 }))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_returns_the_document_then_get_is_not_found() {
    let router = setup_router().await;

    let created = create_event(&router, &dinner_body()).await;
    let id = created["id"].as_str().unwrap();

    let response = AxumTestRequest::delete(&format!("/api/v1/events/{id}"))
        .send(router.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let deleted: Value = response.json();
    assert_eq!(deleted, created);

    let response = AxumTestRequest::get(&format!("/api/v1/events/{id}"))
        .send(router)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
