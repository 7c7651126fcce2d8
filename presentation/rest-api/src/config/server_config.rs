use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_port: {0}")]
    InvalidPort(String),
}

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - PORT: Port to bind (required)
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    ///
    /// # Errors
    /// Returns `ConfigError` if PORT is missing or is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_port = lookup("PORT").ok_or(ConfigError::MissingVariable("PORT"))?;
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
