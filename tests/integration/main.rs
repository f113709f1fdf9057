// Router-level integration tests
// Run with: cargo test --test integration

mod auth_tests;
mod gate_tests;

use auth_gate::{
    api::{AppState, create_router},
    config::ExecutionMode,
    services::AuthService,
};
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn test_app(mode: ExecutionMode) -> axum::Router {
    create_router(AppState {
        auth_service: Arc::new(AuthService::new(mode)),
    })
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
