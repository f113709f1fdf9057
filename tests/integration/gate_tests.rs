use auth_gate::config::ExecutionMode;
use axum::http::StatusCode;
use tower::ServiceExt;

use crate::{body_json, get, test_app};

#[tokio::test]
async fn test_health_passes_through_gate() {
    let response = test_app(ExecutionMode::Production)
        .oneshot(get("/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["mode"], "production");
}

#[tokio::test]
async fn test_gate_never_blocks() {
    // Gated, exempt and matcher-bypassed paths all reach the router; none has
    // a route, so each falls through to the 404 handler instead of a 401.
    for path in [
        "/",
        "/dashboard",
        "/api/data",
        "/_next/data/build/page.json",
        "/robots.txt",
        "/icons/icon.png",
        "/login",
        "/api/cron/nightly",
        "/_next/static/app.js",
    ] {
        let response = test_app(ExecutionMode::Production)
            .oneshot(get(path, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
        assert_eq!(body_json(response).await["error"], "Resource not found");
    }
}

#[tokio::test]
async fn test_gate_forwards_cookies_unmodified() {
    let response = test_app(ExecutionMode::Production)
        .oneshot(get(
            "/api/auth/me",
            Some("auth=%7B%22username%22%3A%22erin%22%7D"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "erin");
}
