//! Tests for `AppError` and `SubmissionError` → HTTP response mapping.
//!
//! These tests do NOT need an HTTP server or database -- they call
//! `IntoResponse` directly on error values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use formflow_api::error::AppError;
use formflow_api::submission::SubmissionError;
use formflow_core::error::CoreError;
use formflow_core::submission::SubmissionStage;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Helper: convert a `SubmissionError` into its status code and text body.
async fn submission_error_to_response(err: SubmissionError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Malformed JSON body".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Malformed JSON body");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("userId must be positive".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn transform_error_returns_422() {
    let err = AppError::Core(CoreError::Transform {
        field: "experience",
        expected: "an integer",
        found: "boolean".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "TRANSFORM_ERROR");
    assert_eq!(
        json["error"],
        "Field 'experience' expects an integer but found boolean"
    );
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::Protocol(
        "secret connection string leaked".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("secret"));
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn submission_storage_error_is_plain_text_500_without_db_detail() {
    let err = SubmissionError::Storage {
        stage: SubmissionStage::Committing,
        source: sqlx::Error::PoolTimedOut,
    };

    let (status, text) = submission_error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        text,
        "Error during final submission: storage failure while committing the master record"
    );
}

#[tokio::test]
async fn submission_transform_error_is_plain_text_422() {
    let err = SubmissionError::Transform(CoreError::Transform {
        field: "skills",
        expected: "text",
        found: "object".into(),
    });

    let (status, text) = submission_error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        text,
        "Error during final submission: Field 'skills' expects text but found object"
    );
}
