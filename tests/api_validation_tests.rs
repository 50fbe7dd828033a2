// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! Bad request bodies are rejected before any Firestore access, so these run
//! against the offline database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn send_json(method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-validation", &state);

    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_upload_blank_title() {
    let (status, body) = send_json(
        "POST",
        "/api/photos",
        json!({ "title": "   ", "image_base64": "aGVsbG8=" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_upload_title_too_long() {
    let (status, _) = send_json(
        "POST",
        "/api/photos",
        json!({ "title": "t".repeat(101), "image_base64": "aGVsbG8=" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_description_too_long() {
    let (status, _) = send_json(
        "POST",
        "/api/photos",
        json!({
            "title": "Sunset",
            "description": "d".repeat(501),
            "image_base64": "aGVsbG8="
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_missing_image() {
    let (status, _) = send_json("POST", "/api/photos", json!({ "title": "Sunset" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_image_not_base64() {
    let (status, _) = send_json(
        "POST",
        "/api/photos",
        json!({ "title": "Sunset", "image_base64": "not base64 at all!" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_valid_body_reaches_database() {
    // A valid body passes validation and then fails on the offline database.
    let (status, _) = send_json(
        "POST",
        "/api/photos",
        json!({
            "title": "Sunset",
            "image_base64": "data:image/jpeg;base64,aGVsbG8="
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_profile_name_too_long() {
    let (status, _) = send_json("PUT", "/api/me", json!({ "name": "n".repeat(51) })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_name_blank() {
    let (status, _) = send_json("PUT", "/api/me", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_theme_blank() {
    let (status, _) = send_json("PUT", "/api/admin/theme", json!({ "theme": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_photo_limit_too_large() {
    let (status, _) = send_json(
        "PUT",
        "/api/admin/settings",
        json!({ "photo_limit": 1_000_000 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ranking_invalid_period() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-validation", &state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/ranking?period=2024-13")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
