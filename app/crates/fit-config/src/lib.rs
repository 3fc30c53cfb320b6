mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod sync_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use sync_config::SyncConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "FIT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".fit";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_DATABASE_FILENAME: &str = "fitsync.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
