use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::state::test_helpers::test_app_state;

async fn post_json(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let app = api_routes(test_app_state());
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// =============================================================================
// user_error_to_status
// =============================================================================

#[test]
fn status_for_validation_errors_is_bad_request() {
    assert_eq!(user_error_to_status(&UserError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(user_error_to_status(&UserError::MissingPassword), StatusCode::BAD_REQUEST);
}

#[test]
fn status_for_duplicate_email_is_conflict() {
    assert_eq!(user_error_to_status(&UserError::EmailTaken), StatusCode::CONFLICT);
}

#[test]
fn status_for_bad_credentials_is_unauthorized() {
    assert_eq!(user_error_to_status(&UserError::InvalidCredentials), StatusCode::UNAUTHORIZED);
}

#[test]
fn status_for_db_error_is_internal() {
    assert_eq!(user_error_to_status(&UserError::Db(sqlx::Error::RowNotFound)), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// handlers (no live DB: validation must answer before any query)
// =============================================================================

#[tokio::test]
async fn register_rejects_invalid_email() {
    let (status, body) = post_json("/users/register", r#"{"email":"nope","password":"pw"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid email");
}

#[tokio::test]
async fn login_rejects_empty_password() {
    let (status, body) = post_json("/users/login", r#"{"email":"a@b.com","password":""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn login_hides_database_errors() {
    let (status, body) = post_json("/users/login", r#"{"email":"a@b.com","password":"pw"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let (status, body) = post_json("/users/register", r#"{"email":"a@b.com"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("missing field `password`"), "{message}");
}

#[tokio::test]
async fn login_rejects_malformed_json_with_error_body() {
    let (status, body) = post_json("/users/login", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn login_rejects_wrong_content_type_with_error_body() {
    let app = api_routes(test_app_state());
    let request = Request::post("/users/login")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"email":"a@b.com","password":"pw"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_app_state());
    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
