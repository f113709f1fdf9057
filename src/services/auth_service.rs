use thiserror::Error;

use crate::config::ExecutionMode;
use crate::domain::{AuthRecord, RecordParseError};
use crate::utils::{
    CookieJar, CookieSource, DecodeError, decode_component, decode_component_twice_if_needed,
};

pub const AUTH_COOKIE: &str = "auth";

/// Why a cookie did not yield a record. Never surfaced past this service.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No browser context")]
    NoContext,

    #[error("Auth cookie not present")]
    MissingCookie,

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Parse error: {0}")]
    Parse(#[from] RecordParseError),
}

impl AuthError {
    /// Short label safe to log; never includes cookie content.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::NoContext => "no_context",
            AuthError::MissingCookie => "missing_cookie",
            AuthError::Decode(_) => "decode",
            AuthError::Parse(_) => "parse",
        }
    }
}

/// Resolves the authentication record carried by the `auth` cookie.
#[derive(Debug, Clone)]
pub struct AuthService {
    mode: ExecutionMode,
}

impl AuthService {
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Server-side resolution from a request's cookies.
    ///
    /// In development mode the default record is returned without looking at
    /// the cookies. Otherwise the `auth` cookie is percent-decoded once and
    /// parsed; any failure yields `None`.
    pub fn resolve_from_request_cookies<S>(&self, source: &S) -> Option<AuthRecord>
    where
        S: CookieSource + ?Sized,
    {
        if self.mode.is_development() {
            return Some(AuthRecord::development_default());
        }

        Self::absorb(Self::decode_request_cookie(source))
    }

    /// Client-side resolution from the combined `document.cookie` string.
    ///
    /// `document_cookie` is `None` when no in-page context exists (server
    /// prerendering), in which case nothing resolves, development mode included.
    pub fn resolve_from_browser_cookies(&self, document_cookie: Option<&str>) -> Option<AuthRecord> {
        let Some(raw) = document_cookie else {
            return Self::absorb(Err(AuthError::NoContext));
        };

        if self.mode.is_development() {
            return Some(AuthRecord::development_default());
        }

        Self::absorb(Self::decode_browser_cookie(raw))
    }

    fn decode_request_cookie<S>(source: &S) -> Result<AuthRecord, AuthError>
    where
        S: CookieSource + ?Sized,
    {
        let value = source.cookie(AUTH_COOKIE).ok_or(AuthError::MissingCookie)?;
        let decoded = decode_component(&value)?;
        Ok(AuthRecord::from_json(&decoded)?)
    }

    fn decode_browser_cookie(raw: &str) -> Result<AuthRecord, AuthError> {
        let jar = CookieJar::parse(raw);
        let value = jar.get(AUTH_COOKIE).ok_or(AuthError::MissingCookie)?;
        let decoded = decode_component_twice_if_needed(value)?;
        Ok(AuthRecord::from_json(&decoded)?)
    }

    fn absorb(result: Result<AuthRecord, AuthError>) -> Option<AuthRecord> {
        match result {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(kind = err.kind(), "Auth cookie unresolvable");
                None
            }
        }
    }
}
