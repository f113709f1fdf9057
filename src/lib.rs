pub mod api;
pub mod config;
pub mod domain;
pub mod middleware;
pub mod services;
pub mod utils;

pub use config::{ExecutionMode, Settings};
pub use domain::AuthRecord;
pub use services::AuthService;
