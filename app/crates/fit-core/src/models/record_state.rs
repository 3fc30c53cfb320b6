use crate::UserRecord;

use serde::{Deserialize, Serialize};

/// Value delivered by the current-user query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "record", rename_all = "snake_case")]
pub enum RecordState {
    /// Subscription has not produced its first value
    #[default]
    Pending,
    /// No record exists for the identity yet
    Missing,
    Found(UserRecord),
}

impl RecordState {
    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::Pending | Self::Missing => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<Option<UserRecord>> for RecordState {
    fn from(record: Option<UserRecord>) -> Self {
        match record {
            Some(record) => Self::Found(record),
            None => Self::Missing,
        }
    }
}
