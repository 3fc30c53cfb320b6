use fit_config::ConfigError;
use fit_db::DbError;
use fit_sync::SyncError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Sync error: {source} {location}")]
    Sync {
        #[source]
        source: SyncError,
        location: ErrorLocation,
    },

    #[error("No user record for identity {identity_id} {location}")]
    UserNotFound {
        identity_id: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON serialization failed: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn user_not_found(identity_id: impl Into<String>) -> Self {
        Self::UserNotFound {
            identity_id: identity_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for CliError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SyncError> for CliError {
    #[track_caller]
    fn from(source: SyncError) -> Self {
        Self::Sync {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
