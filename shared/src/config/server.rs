//! HTTP server configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Allowed CORS origins in production (comma-separated in the env)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Recognised variables: `SERVER_HOST`, `SERVER_PORT`, `SERVER_WORKERS`,
    /// `ALLOWED_ORIGINS` (comma-separated).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            workers: env::var("SERVER_WORKERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.workers),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Bind address in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_formats_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
