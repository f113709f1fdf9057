pub mod auth_service;

pub use auth_service::{AUTH_COOKIE, AuthError, AuthService};
