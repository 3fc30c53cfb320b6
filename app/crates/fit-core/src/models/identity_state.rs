use crate::Identity;

use serde::{Deserialize, Serialize};

/// Value delivered by the identity feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "identity", rename_all = "snake_case")]
pub enum IdentityState {
    /// Provider has not finished loading yet
    #[default]
    Initializing,
    SignedOut,
    SignedIn(Identity),
}

impl IdentityState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            Self::Initializing | Self::SignedOut => None,
        }
    }

    pub fn identity_id(&self) -> Option<&str> {
        self.identity().map(|identity| identity.id.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}
