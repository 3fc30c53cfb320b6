#![allow(dead_code)]

use fit_core::{EmailAddress, Identity, IdentityState, ReconcileRequest, RecordState, UserRecord};
use fit_sync::{SyncError, UserReconciler};

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Notify, watch};
use tokio::time::Instant;
use uuid::Uuid;

/// Backend double: answers from a script and records every call.
///
/// Successful calls publish the created record on the record feed, the way
/// the real store's live query would. Once the script runs out every call
/// succeeds.
pub struct ScriptedReconciler {
    outcomes: Mutex<VecDeque<Result<(), String>>>,
    calls: Mutex<Vec<(ReconcileRequest, Instant)>>,
    record_tx: watch::Sender<RecordState>,
}

impl ScriptedReconciler {
    pub fn new(record_tx: watch::Sender<RecordState>) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            record_tx,
        }
    }

    pub fn fail_next(self, times: usize, message: &str) -> Self {
        {
            let mut outcomes = self.outcomes.lock().unwrap();
            for _ in 0..times {
                outcomes.push_back(Err(message.to_string()));
            }
        }
        self
    }

    pub fn calls(&self) -> Vec<(ReconcileRequest, Instant)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl UserReconciler for ScriptedReconciler {
    async fn reconcile(&self, request: &ReconcileRequest) -> fit_sync::Result<Uuid> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), Instant::now()));

        let outcome = self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()));
        match outcome {
            Ok(()) => {
                let record = UserRecord::new(
                    request.identity_id.clone(),
                    request.email.clone(),
                    request.name.clone(),
                );
                let id = record.id;
                self.record_tx.send_replace(RecordState::Found(record));
                Ok(id)
            }
            Err(message) => Err(SyncError::reconcile(message)),
        }
    }
}

/// Backend double whose calls take `delay` to finish.
pub struct SlowReconciler {
    delay: Duration,
    pub started: Notify,
    completed: AtomicBool,
}

impl SlowReconciler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: Notify::new(),
            completed: AtomicBool::new(false),
        }
    }

    pub fn completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserReconciler for SlowReconciler {
    async fn reconcile(&self, _request: &ReconcileRequest) -> fit_sync::Result<Uuid> {
        self.started.notify_one();
        tokio::time::sleep(self.delay).await;
        self.completed.store(true, Ordering::SeqCst);
        Ok(Uuid::new_v4())
    }
}

pub fn signed_in(identity_id: &str) -> IdentityState {
    IdentityState::SignedIn(
        Identity::new(identity_id)
            .with_email(EmailAddress::primary(format!("{}@example.com", identity_id))),
    )
}
