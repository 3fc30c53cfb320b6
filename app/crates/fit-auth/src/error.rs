use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("An account already exists for {email} {location}")]
    AccountExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("No account found for {email} {location}")]
    UnknownAccount {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid verification code {location}")]
    InvalidVerificationCode { location: ErrorLocation },

    #[error("Email {email} is already verified {location}")]
    AlreadyVerified {
        email: String,
        location: ErrorLocation,
    },

    #[error("No user is signed in {location}")]
    NotSignedIn { location: ErrorLocation },
}

impl AuthError {
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text suitable for an alert in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::AccountExists { .. } => "An account with this email already exists".into(),
            Self::UnknownAccount { .. } => "No account found for this email".into(),
            Self::InvalidCredentials { .. } => {
                "Sign in failed. Please check your credentials.".into()
            }
            Self::InvalidVerificationCode { .. } => {
                "Verification failed. Please try again.".into()
            }
            Self::AlreadyVerified { .. } => "This email is already verified".into(),
            Self::NotSignedIn { .. } => "Please sign in first".into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
