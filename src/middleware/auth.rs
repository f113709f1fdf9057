// Request-time authentication gate.
// Enforcement is switched off: every request is forwarded unmodified, but the
// exemption classification stays available for when it is switched back on.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

use super::matcher::is_gated;

/// Path prefixes that never need authentication (static assets, well-known files).
pub const EXEMPT_PREFIXES: [&str; 7] = [
    "/_next",
    "/favicon.ico",
    "/robots.txt",
    "/manifest.json",
    "/icons/",
    "/logo.png",
    "/screenshot.png",
];

/// Whether `path` is exempt from authentication enforcement.
pub fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Authentication gate middleware.
///
/// Paths outside the matcher never reach the gate logic. Exempt and non-exempt
/// paths alike are currently let through.
pub async fn auth_gate(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();

    if !is_gated(path) {
        return next.run(req).await;
    }

    if is_exempt(path) {
        tracing::trace!("Auth gate: {} is exempt", path);
        return next.run(req).await;
    }

    tracing::trace!("Auth gate: {} allowed, enforcement disabled", path);
    next.run(req).await
}
