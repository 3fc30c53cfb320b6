use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shortest password accepted at sign-up
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        Ok(())
    }
}
