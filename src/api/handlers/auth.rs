use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;

use crate::api::{dto::AuthInfoResponse, error::ApiError};
use crate::services::AuthService;

/// Reports who the `auth` cookie says the caller is.
pub async fn get_current_auth(
    State(service): State<Arc<AuthService>>,
    headers: HeaderMap,
) -> Result<Json<AuthInfoResponse>, ApiError> {
    let record = service
        .resolve_from_request_cookies(&headers)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    Ok(Json(record.into()))
}
