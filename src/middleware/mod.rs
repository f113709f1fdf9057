pub mod auth;
pub mod matcher;

pub use auth::{EXEMPT_PREFIXES, auth_gate, is_exempt};
pub use matcher::is_gated;
