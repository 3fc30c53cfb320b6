//! Identity reconciliation.
//!
//! Keeps the backend user record in step with whoever the identity provider
//! says is signed in. [`SyncMachine`] holds the decision rules and is driven
//! synchronously; [`SyncController`] runs it on a tokio task against live
//! feeds, executing the effects it returns.

pub mod controller;
pub mod error;
pub mod reconciler;
pub mod retry_policy;
pub mod store_reconciler;
pub mod sync_machine;
pub mod sync_state;

pub use controller::{SyncController, SyncHandle};
pub use error::{Result, SyncError};
pub use reconciler::UserReconciler;
pub use retry_policy::RetryPolicy;
pub use store_reconciler::{RECONCILE_FAILED_MESSAGE, StoreReconciler};
pub use sync_machine::{SyncEffect, SyncMachine};
pub use sync_state::SyncState;
