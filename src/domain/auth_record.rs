use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(Role::Owner),
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

/// Authentication payload carried in the `auth` cookie.
///
/// `signature` and `timestamp` are transported as-is; nothing here verifies them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Issuance time, conventionally milliseconds since the Unix epoch. Any
    /// JSON number is accepted and kept as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Error, Debug)]
pub enum RecordParseError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl AuthRecord {
    /// The record handed out unconditionally in development mode.
    pub fn development_default() -> Self {
        AuthRecord {
            username: Some("guest".to_string()),
            password: Some(String::new()),
            role: Some(Role::Owner),
            ..Default::default()
        }
    }

    /// Parses already-decoded cookie content.
    ///
    /// Only a JSON object is accepted; each known key must carry the right
    /// primitive type (or `null`). Unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, RecordParseError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;

        let kind = match &value {
            serde_json::Value::Object(_) => None,
            serde_json::Value::Null => Some("null"),
            serde_json::Value::Bool(_) => Some("boolean"),
            serde_json::Value::Number(_) => Some("number"),
            serde_json::Value::String(_) => Some("string"),
            serde_json::Value::Array(_) => Some("array"),
        };
        if let Some(kind) = kind {
            return Err(RecordParseError::NotAnObject(kind));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Encodes the record into the `auth` cookie wire format (JSON, percent-encoded once).
    pub fn to_cookie_value(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(urlencoding::encode(&json).into_owned())
    }
}
