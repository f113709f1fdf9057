use auth_gate::{
    config::ExecutionMode,
    domain::{AuthRecord, Role},
};
use axum::http::StatusCode;
use tower::ServiceExt;

use crate::{body_json, get, test_app};

#[tokio::test]
async fn test_me_without_cookie_is_unauthorized() {
    let response = test_app(ExecutionMode::Production)
        .oneshot(get("/api/auth/me", Some("foo=bar")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Not authenticated");
}

#[tokio::test]
async fn test_me_with_malformed_cookie_is_unauthorized() {
    for cookie in ["auth=%zz", "auth=%5B1%5D", "auth=%7B%22role%22%3A%22root%22%7D"] {
        let response = test_app(ExecutionMode::Production)
            .oneshot(get("/api/auth/me", Some(cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "cookie {cookie}");
    }
}

#[tokio::test]
async fn test_me_in_development_is_guest_owner() {
    let response = test_app(ExecutionMode::Development)
        .oneshot(get("/api/auth/me", Some("auth=%zz")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "guest");
    assert_eq!(body["role"], "owner");
}

#[tokio::test]
async fn test_me_reports_encoded_record() {
    let record = AuthRecord {
        username: Some("frank".to_string()),
        password: Some("hunter2".to_string()),
        signature: Some("abc123".to_string()),
        timestamp: Some(1_700_000_000_000_i64.into()),
        role: Some(Role::Admin),
    };
    let cookie = format!("theme=dark; auth={}", record.to_cookie_value().unwrap());

    let response = test_app(ExecutionMode::Test)
        .oneshot(get("/api/auth/me", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "frank");
    assert_eq!(body["role"], "admin");
    assert_eq!(body["timestamp"], 1_700_000_000_000_i64);
    assert!(body.get("password").is_none());
    assert!(body.get("signature").is_none());
}
