use crate::{AuthStatus, Credentials, Registration, Result as AuthResult};

use fit_core::IdentityState;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

/// Operations consumed from the identity provider.
///
/// Every call is atomic from the caller's point of view. Calls that
/// establish or clear a session do so by publishing on the feed returned
/// from [`IdentityProvider::subscribe`].
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Live identity feed.
    fn subscribe(&self) -> watch::Receiver<IdentityState>;

    /// Create an account; a verification code is sent to the email.
    async fn sign_up(&self, registration: &Registration) -> AuthResult<AuthStatus>;

    /// Complete sign-up with the emailed code and sign the user in.
    async fn verify_email(&self, email: &str, code: &str) -> AuthResult<AuthStatus>;

    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<AuthStatus>;

    async fn sign_out(&self) -> AuthResult<()>;
}

#[async_trait]
impl<P: IdentityProvider + ?Sized> IdentityProvider for Arc<P> {
    fn subscribe(&self) -> watch::Receiver<IdentityState> {
        (**self).subscribe()
    }

    async fn sign_up(&self, registration: &Registration) -> AuthResult<AuthStatus> {
        (**self).sign_up(registration).await
    }

    async fn verify_email(&self, email: &str, code: &str) -> AuthResult<AuthStatus> {
        (**self).verify_email(email, code).await
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<AuthStatus> {
        (**self).sign_in(credentials).await
    }

    async fn sign_out(&self) -> AuthResult<()> {
        (**self).sign_out().await
    }
}
