use crate::Identity;

use serde::{Deserialize, Serialize};

/// Error text recorded when an identity carries no usable email address.
pub const NO_EMAIL_MESSAGE: &str = "No email found for user";

/// Arguments of a create-or-update call against the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileRequest {
    pub identity_id: String,
    pub email: String,
    pub name: Option<String>,
}

impl ReconcileRequest {
    /// Build the request for an identity.
    ///
    /// Returns `None` when the identity has no usable email; no backend call
    /// can succeed for it until the provider delivers new data.
    pub fn from_identity(identity: &Identity) -> Option<Self> {
        let email = identity.primary_email()?;

        Some(Self {
            identity_id: identity.id.clone(),
            email: email.to_string(),
            name: identity.name().map(str::to_string),
        })
    }
}
