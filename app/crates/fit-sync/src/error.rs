use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Reconcile failed: {message} {location}")]
    Reconcile {
        message: String,
        location: ErrorLocation,
    },

    #[error("Sync controller stopped {location}")]
    ControllerStopped { location: ErrorLocation },
}

impl SyncError {
    #[track_caller]
    pub fn reconcile(message: impl Into<String>) -> Self {
        Self::Reconcile {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn controller_stopped() -> Self {
        Self::ControllerStopped {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text recorded as the snapshot's `last_error`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Reconcile { message, .. } => message.clone(),
            Self::ControllerStopped { .. } => "Sync stopped".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
