//! Runs a [`SyncMachine`] against live feeds.
//!
//! One task owns the machine. Backend calls and retry timers run as their
//! own tasks and report back over an mpsc channel, so the machine is only
//! ever touched from the loop and needs no lock.

use crate::{
    Result as SyncResult, RetryPolicy, SyncEffect, SyncError, SyncMachine, UserReconciler,
};

use fit_core::{IdentityState, RecordState, SyncSnapshot};

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use uuid::Uuid;

const EVENT_CHANNEL_CAPACITY: usize = 16;

enum ControllerEvent {
    Attempted {
        generation: u64,
        result: Result<Uuid, String>,
    },
    RetryDue {
        generation: u64,
    },
}

pub struct SyncController {
    machine: SyncMachine,
    reconciler: Arc<dyn UserReconciler>,
    events_tx: mpsc::Sender<ControllerEvent>,
    retry_timer: Option<JoinHandle<()>>,
    attempts: Vec<JoinHandle<()>>,
    snapshot_tx: watch::Sender<SyncSnapshot>,
}

impl SyncController {
    /// Start reconciling on a background task.
    ///
    /// The task ends on [`SyncHandle::shutdown`] or when the handle is
    /// dropped. A closed input feed is no longer polled; its last value
    /// stays in effect.
    ///
    /// Both feeds are `watch` channels and only their latest value is seen.
    /// Values replaced before the loop gets to them are never observed, so
    /// a quick A, B, A on the identity feed reaches the machine as A again:
    /// no reconcile for B, and A's retry count and pending timer carry on.
    pub fn spawn(
        identity_rx: watch::Receiver<IdentityState>,
        record_rx: watch::Receiver<RecordState>,
        reconciler: Arc<dyn UserReconciler>,
        policy: RetryPolicy,
    ) -> SyncHandle {
        let (snapshot_tx, snapshot_rx) = watch::channel(SyncSnapshot::default());
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        let controller = Self {
            machine: SyncMachine::new(policy),
            reconciler,
            events_tx,
            retry_timer: None,
            attempts: Vec::new(),
            snapshot_tx,
        };

        let task = tokio::spawn(controller.run(identity_rx, record_rx, events_rx, shutdown_rx));

        SyncHandle {
            snapshot_rx,
            shutdown_tx,
            task,
        }
    }

    async fn run(
        mut self,
        mut identity_rx: watch::Receiver<IdentityState>,
        mut record_rx: watch::Receiver<RecordState>,
        mut events_rx: mpsc::Receiver<ControllerEvent>,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) {
        let mut identity_open = true;
        let mut record_open = true;

        self.machine.on_record(record_rx.borrow_and_update().clone());
        let initial = identity_rx.borrow_and_update().clone();
        let effects = self.machine.on_identity(initial);
        self.apply(effects);
        self.publish();

        loop {
            tokio::select! {
                changed = identity_rx.changed(), if identity_open => {
                    if changed.is_err() {
                        debug!("Identity feed closed");
                        identity_open = false;
                        continue;
                    }
                    let next = identity_rx.borrow_and_update().clone();
                    let effects = self.machine.on_identity(next);
                    self.apply(effects);
                }
                changed = record_rx.changed(), if record_open => {
                    if changed.is_err() {
                        debug!("Record feed closed");
                        record_open = false;
                        continue;
                    }
                    self.machine.on_record(record_rx.borrow_and_update().clone());
                }
                Some(event) = events_rx.recv() => {
                    let effects = match event {
                        ControllerEvent::Attempted { generation, result } => {
                            self.machine.on_attempt_finished(generation, result)
                        }
                        ControllerEvent::RetryDue { generation } => {
                            self.machine.on_retry_due(generation)
                        }
                    };
                    self.apply(effects);
                }
                _ = shutdown_rx.recv() => break,
            }

            self.publish();
        }

        self.cancel_retry();
        self.abort_attempts().await;
        info!("Sync controller stopped");
    }

    fn apply(&mut self, effects: Vec<SyncEffect>) {
        for effect in effects {
            match effect {
                SyncEffect::Reconcile {
                    generation,
                    request,
                } => {
                    let reconciler = Arc::clone(&self.reconciler);
                    let events_tx = self.events_tx.clone();
                    self.attempts.retain(|attempt| !attempt.is_finished());
                    self.attempts.push(tokio::spawn(async move {
                        let result = reconciler
                            .reconcile(&request)
                            .await
                            .map_err(|e| e.user_message());
                        // Loop gone means nobody cares about the result
                        let _ = events_tx
                            .send(ControllerEvent::Attempted { generation, result })
                            .await;
                    }));
                }
                SyncEffect::ScheduleRetry { generation, delay } => {
                    self.cancel_retry();
                    let events_tx = self.events_tx.clone();
                    self.retry_timer = Some(tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = events_tx
                            .send(ControllerEvent::RetryDue { generation })
                            .await;
                    }));
                }
                SyncEffect::CancelRetry => self.cancel_retry(),
            }
        }
    }

    fn cancel_retry(&mut self) {
        if let Some(timer) = self.retry_timer.take() {
            timer.abort();
        }
    }

    async fn abort_attempts(&mut self) {
        for attempt in self.attempts.drain(..) {
            if !attempt.is_finished() {
                debug!("Aborting reconcile still in flight");
            }
            attempt.abort();
            // Cancelled is the expected outcome
            let _ = attempt.await;
        }
    }

    fn publish(&self) {
        let next = self.machine.snapshot();
        self.snapshot_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

/// Owner's side of a running [`SyncController`].
pub struct SyncHandle {
    snapshot_rx: watch::Receiver<SyncSnapshot>,
    shutdown_tx: broadcast::Sender<()>,
    task: JoinHandle<()>,
}

impl SyncHandle {
    pub fn subscribe(&self) -> watch::Receiver<SyncSnapshot> {
        self.snapshot_rx.clone()
    }

    pub fn snapshot(&self) -> SyncSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Wait for the first snapshot, current one included, matching `predicate`.
    pub async fn wait_until<F>(&self, predicate: F) -> SyncResult<SyncSnapshot>
    where
        F: FnMut(&SyncSnapshot) -> bool,
    {
        let mut rx = self.subscribe();
        let snapshot = rx
            .wait_for(predicate)
            .await
            .map_err(|_| SyncError::controller_stopped())?;
        Ok(snapshot.clone())
    }

    /// Stop the controller and wait for its task to finish.
    ///
    /// Pending retry timers and reconcile calls still running are aborted,
    /// and the call tasks are awaited before this returns.
    pub async fn shutdown(self) -> SyncResult<()> {
        let _ = self.shutdown_tx.send(());
        self.task
            .await
            .map_err(|_| SyncError::controller_stopped())
    }
}
