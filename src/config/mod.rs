pub mod settings;

pub use settings::{AppConfig, ExecutionMode, ServerConfig, Settings};
