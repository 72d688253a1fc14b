mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_SERVER_NAME: &str = "Minecraft Server";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 25565;

/// Polls never run more often than once a minute
pub const MIN_UPDATE_INTERVAL_MS: u64 = 60_000;
const DEFAULT_UPDATE_INTERVAL_MS: u64 = MIN_UPDATE_INTERVAL_MS;

const DEFAULT_API_BASE_URL: &str = "https://api.mcsrvstat.us";
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
