//! Identity as issued by the identity provider.
//!
//! The controller only ever reads identities. The provider owns their
//! lifecycle: created on sign-up, available after sign-in, gone on sign-out.

use crate::EmailAddress;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque and stable, unique per authenticated principal
    pub id: String,
    /// Ordered as the provider lists them
    #[serde(default)]
    pub emails: Vec<EmailAddress>,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            emails: Vec::new(),
            display_name: None,
        }
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.emails.push(email);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The address flagged primary, else the first address in list order.
    ///
    /// Blank addresses are skipped in both passes.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|email| email.primary && email.is_usable())
            .or_else(|| self.emails.iter().find(|email| email.is_usable()))
            .map(|email| email.address.as_str())
    }

    /// Display name, with blank names treated as absent.
    pub fn name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
