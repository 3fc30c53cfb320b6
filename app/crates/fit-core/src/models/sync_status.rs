use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Sync status shown to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Signed in, waiting for the first record query result
    Loading,
    /// A record exists for the current identity
    Synced,
    /// Everything else, including terminal failure
    #[default]
    NotSynced,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Synced => "synced",
            Self::NotSynced => "not_synced",
        }
    }
}

impl FromStr for SyncStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "loading" => Ok(Self::Loading),
            "synced" => Ok(Self::Synced),
            "not_synced" => Ok(Self::NotSynced),
            _ => Err(CoreError::InvalidSyncStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
