use crate::{Result as SyncResult, SyncError, UserReconciler};

use fit_core::ReconcileRequest;
use fit_db::UserStore;

use async_trait::async_trait;
use log::error;
use uuid::Uuid;

/// Message shown for any store failure; details go to the log.
pub const RECONCILE_FAILED_MESSAGE: &str = "Failed to create or update user";

/// Reconciles against the local [`UserStore`].
#[derive(Clone)]
pub struct StoreReconciler {
    store: UserStore,
}

impl StoreReconciler {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserReconciler for StoreReconciler {
    async fn reconcile(&self, request: &ReconcileRequest) -> SyncResult<Uuid> {
        self.store.reconcile(request).await.map_err(|e| {
            error!("Failed to reconcile user {}: {}", request.identity_id, e);
            SyncError::reconcile(RECONCILE_FAILED_MESSAGE)
        })
    }
}
