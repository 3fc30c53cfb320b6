use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Retry ceiling per identity and session
pub const MIN_MAX_RETRIES: u32 = 1;
pub const MAX_MAX_RETRIES: u32 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

// Base of the linear backoff: delay = base * (retry_count + 1)
pub const MIN_RETRY_BASE_DELAY_MS: u64 = 100;
pub const MAX_RETRY_BASE_DELAY_MS: u64 = 60_000;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 2_000;

/// Identity reconciliation retry settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Failed attempts allowed before the identity is left not synced
    pub max_retries: u32,
    /// Delay before the first retry in milliseconds
    pub retry_base_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_retries < MIN_MAX_RETRIES || self.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::sync(format!(
                "sync.max_retries must be {}-{}, got {}",
                MIN_MAX_RETRIES, MAX_MAX_RETRIES, self.max_retries
            )));
        }

        if self.retry_base_delay_ms < MIN_RETRY_BASE_DELAY_MS
            || self.retry_base_delay_ms > MAX_RETRY_BASE_DELAY_MS
        {
            return Err(ConfigError::sync(format!(
                "sync.retry_base_delay_ms must be {}-{}, got {}",
                MIN_RETRY_BASE_DELAY_MS, MAX_RETRY_BASE_DELAY_MS, self.retry_base_delay_ms
            )));
        }

        Ok(())
    }
}
