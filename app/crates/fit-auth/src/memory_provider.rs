//! In-memory identity provider.

use crate::{
    AuthError, AuthStatus, Credentials, IdentityProvider, Registration, Result as AuthResult,
    hash_password, verify_password,
};

use fit_config::AuthConfig;
use fit_core::{EmailAddress, Identity, IdentityState};

use std::collections::HashMap;
use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use tokio::sync::{Mutex, watch};
use uuid::Uuid;

const VERIFICATION_CODE_SPACE: u32 = 1_000_000;

struct Account {
    identity: Identity,
    salt: String,
    password_hash: String,
    verified: bool,
    pending_code: Option<String>,
}

#[derive(Default)]
struct ProviderState {
    /// Keyed by lowercased sign-up email
    accounts: HashMap<String, Account>,
    /// Key of the signed-in account
    session: Option<String>,
}

/// Accounts live in process memory only.
///
/// Verification codes are not delivered anywhere; they can be read back
/// with [`MemoryIdentityProvider::pending_verification_code`].
pub struct MemoryIdentityProvider {
    config: AuthConfig,
    state: Mutex<ProviderState>,
    identity_tx: watch::Sender<IdentityState>,
}

impl MemoryIdentityProvider {
    pub fn new(config: AuthConfig) -> Self {
        let (identity_tx, _) = watch::channel(IdentityState::SignedOut);
        Self {
            config,
            state: Mutex::new(ProviderState::default()),
            identity_tx,
        }
    }

    /// Code waiting to be entered for an unverified account.
    pub async fn pending_verification_code(&self, email: &str) -> Option<String> {
        let state = self.state.lock().await;
        state
            .accounts
            .get(&account_key(email))
            .and_then(|account| account.pending_code.clone())
    }

    /// Change the display name of the signed-in identity.
    pub async fn set_display_name(&self, name: Option<&str>) -> AuthResult<()> {
        self.update_session_identity(|identity| {
            identity.display_name = name.map(str::to_string);
        })
        .await
    }

    /// Attach another verified address to the signed-in identity.
    pub async fn add_email(&self, address: &str, make_primary: bool) -> AuthResult<()> {
        self.update_session_identity(|identity| {
            if make_primary {
                for email in identity.emails.iter_mut() {
                    email.primary = false;
                }
            }
            identity.emails.push(EmailAddress {
                address: address.to_string(),
                primary: make_primary,
            });
        })
        .await
    }

    async fn update_session_identity<F>(&self, update: F) -> AuthResult<()>
    where
        F: FnOnce(&mut Identity) + Send,
    {
        let mut state = self.state.lock().await;
        let key = state.session.clone().ok_or_else(|| AuthError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        })?;
        let account = state
            .accounts
            .get_mut(&key)
            .ok_or_else(|| AuthError::NotSignedIn {
                location: ErrorLocation::from(Location::caller()),
            })?;

        update(&mut account.identity);
        self.publish(IdentityState::SignedIn(account.identity.clone()));
        Ok(())
    }

    fn publish(&self, next: IdentityState) {
        self.identity_tx.send_replace(next);
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    fn subscribe(&self) -> watch::Receiver<IdentityState> {
        self.identity_tx.subscribe()
    }

    async fn sign_up(&self, registration: &Registration) -> AuthResult<AuthStatus> {
        registration.validate(&self.config)?;

        let key = account_key(&registration.email);
        let mut state = self.state.lock().await;

        if let Some(existing) = state.accounts.get(&key)
            && existing.verified
        {
            return Err(AuthError::AccountExists {
                email: registration.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // An unverified account is replaced, which also reissues the code
        let salt = Uuid::new_v4().simple().to_string();
        let identity = Identity::new(format!("user_{}", Uuid::new_v4().simple()))
            .with_email(EmailAddress::primary(registration.email.trim()));
        let code = new_verification_code();

        info!("Sign-up started for {} ({})", key, identity.id);
        debug!("Verification code for {}: {}", key, code);

        state.accounts.insert(
            key,
            Account {
                identity,
                password_hash: hash_password(&salt, &registration.password),
                salt,
                verified: false,
                pending_code: Some(code),
            },
        );

        Ok(AuthStatus::NeedsVerification)
    }

    async fn verify_email(&self, email: &str, code: &str) -> AuthResult<AuthStatus> {
        let key = account_key(email);
        let mut state = self.state.lock().await;

        let account = state
            .accounts
            .get_mut(&key)
            .ok_or_else(|| AuthError::UnknownAccount {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if account.verified {
            return Err(AuthError::AlreadyVerified {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if account.pending_code.as_deref() != Some(code.trim()) {
            return Err(AuthError::InvalidVerificationCode {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        account.verified = true;
        account.pending_code = None;
        let identity = account.identity.clone();
        state.session = Some(key);

        info!("Email verified, signed in {}", identity.id);
        self.publish(IdentityState::SignedIn(identity));
        Ok(AuthStatus::Complete)
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<AuthStatus> {
        credentials.validate()?;

        let key = account_key(&credentials.email);
        let mut state = self.state.lock().await;

        let account = state
            .accounts
            .get_mut(&key)
            .filter(|account| {
                verify_password(&account.salt, &credentials.password, &account.password_hash)
            })
            .ok_or_else(|| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !account.verified {
            let code = new_verification_code();
            debug!("Verification code for {}: {}", key, code);
            account.pending_code = Some(code);
            return Ok(AuthStatus::NeedsVerification);
        }

        let identity = account.identity.clone();
        state.session = Some(key);

        info!("Signed in {}", identity.id);
        self.publish(IdentityState::SignedIn(identity));
        Ok(AuthStatus::Complete)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let mut state = self.state.lock().await;
        if let Some(key) = state.session.take() {
            info!("Signed out {}", key);
        }
        self.publish(IdentityState::SignedOut);
        Ok(())
    }
}

fn account_key(email: &str) -> String {
    email.trim().to_lowercase()
}

fn new_verification_code() -> String {
    format!("{:06}", rand::random_range(0..VERIFICATION_CODE_SPACE))
}
