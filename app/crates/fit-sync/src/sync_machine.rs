//! Reconciliation rules, free of any runtime.
//!
//! The machine is fed the latest identity and record values plus the
//! outcomes of the work it asked for, and answers with [`SyncEffect`]s for
//! the caller to carry out. Every attempt and retry timer is tagged with the
//! generation that requested it; anything arriving with an older generation
//! is dropped.

use crate::{RetryPolicy, SyncState};

use fit_core::{
    IdentityState, NO_EMAIL_MESSAGE, ReconcileRequest, RecordState, SyncSnapshot, SyncStatus,
};

use std::time::Duration;

use log::{debug, error, info, warn};
use uuid::Uuid;

/// Work requested by the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEffect {
    /// Call the backend and report back through `on_attempt_finished`
    Reconcile {
        generation: u64,
        request: ReconcileRequest,
    },
    /// Call `on_retry_due` once `delay` has elapsed
    ScheduleRetry { generation: u64, delay: Duration },
    /// Drop any timer scheduled earlier
    CancelRetry,
}

#[derive(Debug)]
pub struct SyncMachine {
    policy: RetryPolicy,
    identity: IdentityState,
    record: RecordState,
    state: SyncState,
}

impl SyncMachine {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            identity: IdentityState::default(),
            record: RecordState::default(),
            state: SyncState::default(),
        }
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// New value from the identity feed.
    pub fn on_identity(&mut self, next: IdentityState) -> Vec<SyncEffect> {
        let previous = std::mem::replace(&mut self.identity, next);

        if previous.identity_id() != self.identity.identity_id() {
            let mut effects = Vec::new();
            if previous.identity_id().is_some() {
                debug!(
                    "Identity changed from {:?} to {:?}, resetting sync state",
                    previous.identity_id(),
                    self.identity.identity_id()
                );
                self.state.reset();
                effects.push(SyncEffect::CancelRetry);
            }
            effects.extend(self.evaluate());
            return effects;
        }

        // Same id: only new email data can unblock an identity without one
        match (previous.identity(), self.identity.identity()) {
            (Some(before), Some(after))
                if self.state.missing_email && before.emails != after.emails =>
            {
                debug!("Email data changed for {}, re-evaluating", after.id);
                self.state.missing_email = false;
                self.state.last_error = None;
                self.evaluate()
            }
            _ => Vec::new(),
        }
    }

    /// New value from the current-user query. Only affects the snapshot.
    pub fn on_record(&mut self, next: RecordState) {
        self.record = next;
    }

    /// Outcome of a `Reconcile` effect. `Err` carries the user-facing message.
    pub fn on_attempt_finished(
        &mut self,
        generation: u64,
        result: Result<Uuid, String>,
    ) -> Vec<SyncEffect> {
        if generation != self.state.generation {
            debug!(
                "Discarding reconcile result from generation {} (current {})",
                generation, self.state.generation
            );
            return Vec::new();
        }

        self.state.in_flight = false;
        let identity_id = self.identity.identity_id().map(str::to_string);

        match result {
            Ok(id) => {
                info!("User synced: {:?} -> {}", identity_id, id);
                self.state.last_synced_identity = identity_id;
                self.state.retry_count = 0;
                self.state.last_error = None;
                Vec::new()
            }
            Err(message) => {
                warn!(
                    "Failed to sync user {:?} (retry {}): {}",
                    identity_id, self.state.retry_count, message
                );
                self.state.last_error = Some(message);

                if self.policy.is_exhausted(self.state.retry_count) {
                    return Vec::new();
                }

                let delay = self.policy.delay_for(self.state.retry_count);
                debug!("Retrying sync in {:?}", delay);
                self.state.retry_pending = true;
                vec![SyncEffect::ScheduleRetry { generation, delay }]
            }
        }
    }

    /// A timer from a `ScheduleRetry` effect fired.
    pub fn on_retry_due(&mut self, generation: u64) -> Vec<SyncEffect> {
        if generation != self.state.generation || !self.state.retry_pending {
            debug!(
                "Discarding retry timer from generation {} (current {})",
                generation, self.state.generation
            );
            return Vec::new();
        }

        self.state.retry_pending = false;
        self.state.retry_count += 1;
        self.evaluate()
    }

    pub fn snapshot(&self) -> SyncSnapshot {
        let identity_id = self.identity.identity_id();
        let record = identity_id.and_then(|id| {
            self.record
                .record()
                .filter(|record| record.belongs_to(id))
                .cloned()
        });
        let exhausted =
            self.state.last_error.is_some() && self.policy.is_exhausted(self.state.retry_count);

        let status = match (identity_id, &self.record) {
            (None, _) => SyncStatus::NotSynced,
            _ if exhausted => SyncStatus::NotSynced,
            (Some(_), _) if record.is_some() => SyncStatus::Synced,
            (Some(_), RecordState::Pending | RecordState::Found(_)) => SyncStatus::Loading,
            (Some(_), RecordState::Missing) => SyncStatus::NotSynced,
        };

        let idle = !self.state.in_flight && !self.state.retry_pending;
        let settled = identity_id.is_some()
            && idle
            && (self.state.last_error.is_some()
                || self.state.last_synced_identity.as_deref() == identity_id);

        SyncSnapshot {
            record,
            status,
            last_error: self.state.last_error.clone(),
            retry_count: self.state.retry_count,
            settled,
        }
    }

    fn evaluate(&mut self) -> Vec<SyncEffect> {
        let Some(identity) = self.identity.identity() else {
            return Vec::new();
        };

        if self.state.last_synced_identity.as_deref() == Some(identity.id.as_str())
            && self.state.retry_count == 0
        {
            debug!("User {} already synced", identity.id);
            return Vec::new();
        }

        if self.policy.is_exhausted(self.state.retry_count) {
            error!(
                "Max sync retries exceeded for {} ({} of {})",
                identity.id, self.state.retry_count, self.policy.max_retries
            );
            return Vec::new();
        }

        if self.state.in_flight {
            debug!("Sync already in progress for {}", identity.id);
            return Vec::new();
        }

        let Some(request) = ReconcileRequest::from_identity(identity) else {
            warn!("{} for {}", NO_EMAIL_MESSAGE, identity.id);
            self.state.missing_email = true;
            self.state.last_error = Some(NO_EMAIL_MESSAGE.to_string());
            return Vec::new();
        };

        debug!("Reconciling user {} <{}>", request.identity_id, request.email);
        self.state.in_flight = true;
        vec![SyncEffect::Reconcile {
            generation: self.state.generation,
            request,
        }]
    }
}
