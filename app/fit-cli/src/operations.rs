//! What each subcommand does, independent of argument parsing and output.

use crate::{CliError, Result as CliResult};

use fit_core::{EmailAddress, Identity, IdentityState, SyncSnapshot, UserRecord};
use fit_db::UserStore;
use fit_sync::{RetryPolicy, StoreReconciler, SyncController};

use std::sync::Arc;

use log::info;
use tokio::sync::watch;
use uuid::Uuid;

/// Identity to reconcile, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SyncArgs {
    pub identity_id: String,
    pub emails: Vec<String>,
    pub primary_email: Option<String>,
    pub name: Option<String>,
}

impl SyncArgs {
    /// The primary address goes first; it is also appended to `emails`
    /// when not already listed there.
    pub fn identity(&self) -> Identity {
        let mut identity = Identity::new(&self.identity_id);

        for address in &self.emails {
            let is_primary = self.primary_email.as_deref() == Some(address.as_str());
            identity = identity.with_email(EmailAddress {
                address: address.clone(),
                primary: is_primary,
            });
        }

        if let Some(ref primary) = self.primary_email
            && !self.emails.contains(primary)
        {
            identity = identity.with_email(EmailAddress::primary(primary.clone()));
        }

        if let Some(ref name) = self.name {
            identity = identity.with_display_name(name.clone());
        }

        identity
    }
}

/// Run one controller for the identity until it is synced or gives up.
///
/// Success is [`SyncSnapshot::is_complete`]. A record left by an earlier run
/// can be visible in a failed snapshot, so `is_synced` alone is not enough.
pub async fn run_sync(
    store: &UserStore,
    args: &SyncArgs,
    policy: RetryPolicy,
) -> CliResult<SyncSnapshot> {
    let identity = args.identity();
    info!("Syncing identity {}", identity.id);

    let (identity_tx, identity_rx) = watch::channel(IdentityState::SignedIn(identity));
    let record_rx = store.watch_current_user(identity_tx.subscribe());

    let handle = SyncController::spawn(
        identity_rx,
        record_rx,
        Arc::new(StoreReconciler::new(store.clone())),
        policy,
    );

    let mut snapshot = handle
        .wait_until(|snapshot| snapshot.is_complete() || snapshot.is_failed())
        .await?;
    handle.shutdown().await?;

    // The record feed may still hold the row as it was before the call
    if snapshot.is_complete() {
        snapshot.record = store.user_by_identity(&args.identity_id).await?;
    }

    Ok(snapshot)
}

pub async fn show_user(store: &UserStore, identity_id: &str) -> CliResult<UserRecord> {
    store
        .user_by_identity(identity_id)
        .await?
        .ok_or_else(|| CliError::user_not_found(identity_id))
}

pub async fn get_user(store: &UserStore, id: Uuid) -> CliResult<UserRecord> {
    Ok(store.user_by_id(id).await?)
}

/// Set or clear (`None`) the display name on an identity's record.
pub async fn rename_user(
    store: &UserStore,
    identity_id: &str,
    name: Option<&str>,
) -> CliResult<UserRecord> {
    let identity = IdentityState::SignedIn(Identity::new(identity_id));
    let id = store.update_profile(&identity, name).await?;
    Ok(store.user_by_id(id).await?)
}
