//! Server configuration.

use thiserror::Error;

use crate::domain::SendFailurePolicy;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Host cannot be empty")]
    EmptyHost,
}

/// Runtime configuration of the relay server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub send_failure_policy: SendFailurePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            send_failure_policy: SendFailurePolicy::default(),
        }
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyHost` if `host` is empty or blank.
    pub fn new(
        host: String,
        port: u16,
        send_failure_policy: SendFailurePolicy,
    ) -> Result<Self, ConfigError> {
        if host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Ok(Self {
            host,
            port,
            send_failure_policy,
        })
    }

    /// `host:port` string for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
