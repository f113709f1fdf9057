use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::AuthRecord;

// Response DTOs
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub mode: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AuthInfoResponse {
    pub username: Option<String>,
    pub role: Option<String>,
    pub timestamp: Option<serde_json::Number>,
}

impl From<AuthRecord> for AuthInfoResponse {
    fn from(record: AuthRecord) -> Self {
        AuthInfoResponse {
            username: record.username,
            role: record.role.map(|role| role.as_str().to_string()),
            timestamp: record.timestamp,
        }
    }
}
