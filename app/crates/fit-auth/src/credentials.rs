//! Sign-in and sign-up form rules.

use crate::{AuthError, Result as AuthResult};

use fit_config::AuthConfig;

/// Email and password as typed on the sign-in form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> AuthResult<()> {
        if self.email.trim().is_empty() {
            return Err(AuthError::validation(
                "email",
                "Please enter your email address",
            ));
        }

        if self.password.is_empty() {
            return Err(AuthError::validation("password", "Please enter your password"));
        }

        Ok(())
    }
}

/// The sign-up form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Checks run in form order; the first failure is reported.
    pub fn validate(&self, config: &AuthConfig) -> AuthResult<()> {
        if self.email.trim().is_empty() {
            return Err(AuthError::validation(
                "email",
                "Please enter your email address",
            ));
        }

        if !is_valid_email(&self.email) {
            return Err(AuthError::validation(
                "email",
                "Please enter a valid email address",
            ));
        }

        if self.password.is_empty() {
            return Err(AuthError::validation("password", "Please enter a password"));
        }

        if self.password.chars().count() < config.min_password_length {
            return Err(AuthError::validation(
                "password",
                format!(
                    "Password must be at least {} characters long",
                    config.min_password_length
                ),
            ));
        }

        if self.password != self.confirm_password {
            return Err(AuthError::validation(
                "confirm_password",
                "Passwords do not match",
            ));
        }

        Ok(())
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot inside the
/// domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
