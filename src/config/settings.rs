use std::env;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub app: AppConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: ExecutionMode,
}

/// Process-wide execution mode. Only `Development` changes auth behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Development,
    #[default]
    Production,
    Test,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &str {
        match self {
            ExecutionMode::Development => "development",
            ExecutionMode::Production => "production",
            ExecutionMode::Test => "test",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(ExecutionMode::Development),
            "production" | "prod" => Some(ExecutionMode::Production),
            "test" => Some(ExecutionMode::Test),
            _ => None,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, ExecutionMode::Development)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        let mode = match env::var("APP_ENV").or_else(|_| env::var("NODE_ENV")) {
            Ok(raw) => ExecutionMode::parse(&raw)
                .ok_or_else(|| format!("Invalid APP_ENV/NODE_ENV: {}", raw))?,
            Err(_) => ExecutionMode::default(),
        };

        Ok(Settings {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|e| format!("Invalid SERVER_PORT: {}", e))?,
            },
            app: AppConfig { mode },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_execution_mode() {
        assert_eq!(
            ExecutionMode::parse("development"),
            Some(ExecutionMode::Development)
        );
        assert_eq!(ExecutionMode::parse(" DEV "), Some(ExecutionMode::Development));
        assert_eq!(ExecutionMode::parse("prod"), Some(ExecutionMode::Production));
        assert_eq!(ExecutionMode::parse("test"), Some(ExecutionMode::Test));
        assert_eq!(ExecutionMode::parse("staging"), None);
    }

    #[test]
    fn test_only_development_is_development() {
        assert!(ExecutionMode::Development.is_development());
        assert!(!ExecutionMode::Production.is_development());
        assert!(!ExecutionMode::Test.is_development());
        assert_eq!(ExecutionMode::default(), ExecutionMode::Production);
    }
}
