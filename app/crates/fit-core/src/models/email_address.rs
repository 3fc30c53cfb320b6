use serde::{Deserialize, Serialize};

/// A verified email address attached to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub address: String,
    /// At most one address per identity is expected to carry this flag
    #[serde(default)]
    pub primary: bool,
}

impl EmailAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            primary: false,
        }
    }

    pub fn primary(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            primary: true,
        }
    }

    pub(crate) fn is_usable(&self) -> bool {
        !self.address.trim().is_empty()
    }
}
