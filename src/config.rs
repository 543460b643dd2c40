//! Configuration types.

use crate::error::{ConfigError, Result};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Gmail REST API root.
pub const GMAIL_API_BASE: &str = "https://gmail.googleapis.com/gmail/v1";

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Listening port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build from environment. Only `ZENBOX_PORT` is read.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_port_var(std::env::var("ZENBOX_PORT").ok())?)
    }

    fn from_port_var(value: Option<String>) -> std::result::Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = value {
            config.port = raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    key: "ZENBOX_PORT".to_string(),
                    message: format!("{raw:?}: {e}"),
                })?;
        }
        Ok(config)
    }

    /// `host:port` string for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Options controlling which messages a scan looks at.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Provider label (folder) to list from.
    pub label: String,
    /// Maximum number of message IDs to list.
    pub max_results: u32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            label: "INBOX".to_string(),
            max_results: 25,
        }
    }
}
