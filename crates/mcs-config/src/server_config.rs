use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SERVER_NAME,
    DEFAULT_UPDATE_INTERVAL_MS, MIN_UPDATE_INTERVAL_MS,
};

use mcs_core::ServerType;

use std::time::Duration;

use serde::Deserialize;

/// The Minecraft server being watched
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Accessory display name
    pub name: String,
    pub host: String,
    pub port: u16,
    #[serde(rename = "type")]
    pub server_type: ServerType,
    /// Requested poll interval; floored at `MIN_UPDATE_INTERVAL_MS`
    pub update_interval_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_SERVER_NAME),
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            server_type: ServerType::default(),
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::server("server.name must not be empty"));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host must not be empty"));
        }

        // Only a bare host name or IP; the port has its own field
        if self.host.contains("://")
            || self.host.contains('/')
            || self.host.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::server(format!(
                "server.host must be a bare host name, got '{}'",
                self.host
            )));
        }

        Ok(())
    }

    /// Poll interval actually used, never below one minute
    pub fn effective_update_interval_ms(&self) -> u64 {
        self.update_interval_ms.max(MIN_UPDATE_INTERVAL_MS)
    }

    pub fn effective_update_interval(&self) -> Duration {
        Duration::from_millis(self.effective_update_interval_ms())
    }

    /// `host:port` as the status API expects it
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
