//! Backend user record - the persisted counterpart of an identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row per identity, enforced by a uniqueness index on `identity_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub identity_id: String,
    /// Primary email of the identity at last reconciliation
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Time of the last reconciliation or profile update
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(identity_id: String, email: String, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            identity_id,
            email,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn belongs_to(&self, identity_id: &str) -> bool {
        self.identity_id == identity_id
    }
}
