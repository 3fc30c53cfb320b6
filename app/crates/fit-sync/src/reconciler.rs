use crate::Result as SyncResult;

use fit_core::ReconcileRequest;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

/// Backend create-or-update keyed on `identity_id`.
///
/// Implementations must be idempotent: calling twice for the same identity
/// leaves one record and returns its id both times.
#[async_trait]
pub trait UserReconciler: Send + Sync {
    async fn reconcile(&self, request: &ReconcileRequest) -> SyncResult<Uuid>;
}

#[async_trait]
impl<R: UserReconciler + ?Sized> UserReconciler for Arc<R> {
    async fn reconcile(&self, request: &ReconcileRequest) -> SyncResult<Uuid> {
        (**self).reconcile(request).await
    }
}
