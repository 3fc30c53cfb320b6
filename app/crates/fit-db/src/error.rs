use std::panic::Location;

use fit_core::CoreError;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row in {table}: {message} {location}")]
    InvalidRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("User not found: {id} {location}")]
    UserNotFound { id: String, location: ErrorLocation },

    #[error("User not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Workout not found: {id} {location}")]
    WorkoutNotFound { id: Uuid, location: ErrorLocation },

    #[error("Unauthorized access to workout {id} {location}")]
    UnauthorizedWorkout { id: Uuid, location: ErrorLocation },

    #[error("Exercise encoding failed: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid workout: {source}")]
    Validation { source: CoreError },
}

impl DbError {
    #[track_caller]
    pub(crate) fn invalid_row(table: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRow {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn workout_not_found(id: Uuid) -> Self {
        Self::WorkoutNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn unauthorized_workout(id: Uuid) -> Self {
        Self::UnauthorizedWorkout {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    fn from(source: CoreError) -> Self {
        Self::Validation { source }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
