use axum::{Router, extract::State, middleware, routing::get};
use std::sync::Arc;

use crate::middleware::auth_gate;
use crate::services::AuthService;

use super::{dto::HealthResponse, error::ApiError, handlers};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route(
            "/health",
            get(health_check).with_state(state.auth_service.clone()),
        )
        // Auth
        .route(
            "/api/auth/me",
            get(handlers::get_current_auth).with_state(state.auth_service.clone()),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(auth_gate))
}

async fn health_check(State(service): State<Arc<AuthService>>) -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        mode: service.mode().as_str().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}
