// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use photo_rally::error::AppError;

#[test]
fn test_status_mapping() {
    assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(AppError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        AppError::Forbidden("self vote".to_string()).status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AppError::NotFound("photo".to_string()).status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::BadRequest("pending".to_string()).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::LimitReached("votes".to_string()).status(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        AppError::Database("down".to_string()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_body_hides_database_details() {
    let response = AppError::Database("connection refused at 10.0.0.1".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_error_body_includes_client_details() {
    let response =
        AppError::LimitReached("You can upload at most 3 photos".to_string()).into_response();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "limit_reached");
    assert_eq!(body["details"], "You can upload at most 3 photos");
}

#[test]
fn test_validation_errors_map_to_bad_request() {
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    let err: AppError = Named {
        name: String::new(),
    }
    .validate()
    .unwrap_err()
    .into();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}
