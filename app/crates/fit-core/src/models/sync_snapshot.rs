use crate::{SyncStatus, UserRecord};

use serde::{Deserialize, Serialize};

/// What the UI layer sees of the reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncSnapshot {
    pub record: Option<UserRecord>,
    pub status: SyncStatus,
    pub last_error: Option<String>,
    pub retry_count: u32,
    /// No further attempt will happen for the current identity without new input
    pub settled: bool,
}

impl SyncSnapshot {
    pub fn is_synced(&self) -> bool {
        self.status == SyncStatus::Synced
    }

    /// Synced to a record written in this session, with no error outstanding.
    pub fn is_complete(&self) -> bool {
        self.is_synced() && self.settled && self.last_error.is_none()
    }

    /// Settled with an error: retries exhausted or the identity has no email.
    pub fn is_failed(&self) -> bool {
        self.settled && self.last_error.is_some()
    }
}
