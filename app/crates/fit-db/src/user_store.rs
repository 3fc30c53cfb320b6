//! Backend user store: mutations plus a reactive current-user query, and the
//! workouts owned by each user record.

use crate::{DbError, Result as DbErrorResult, UserRepository, WorkoutRepository};

use fit_core::{
    IdentityState, NewWorkout, ReconcileRequest, RecordState, UserRecord, Workout, WorkoutStats,
    WorkoutUpdate,
};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info};
use sqlx::SqlitePool;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use uuid::Uuid;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Shared handle to the user and workout tables.
///
/// Every successful user write publishes the affected identity id so that
/// subscriptions created by [`UserStore::watch_current_user`] re-run.
#[derive(Clone)]
pub struct UserStore {
    repository: Arc<UserRepository>,
    workouts: Arc<WorkoutRepository>,
    changes: broadcast::Sender<String>,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            repository: Arc::new(UserRepository::new(pool.clone())),
            workouts: Arc::new(WorkoutRepository::new(pool)),
            changes,
        }
    }

    /// Create or update the record for an identity and return its id.
    pub async fn reconcile(&self, request: &ReconcileRequest) -> DbErrorResult<Uuid> {
        let id = self.repository.upsert(request).await?;
        debug!("Reconciled user {} -> {}", request.identity_id, id);
        self.notify(&request.identity_id);
        Ok(id)
    }

    pub async fn user_by_identity(&self, identity_id: &str) -> DbErrorResult<Option<UserRecord>> {
        self.repository.find_by_identity_id(identity_id).await
    }

    pub async fn user_by_id(&self, id: Uuid) -> DbErrorResult<UserRecord> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbError::user_not_found(id.to_string()))
    }

    /// Record of the signed-in identity; `None` when nobody is signed in.
    pub async fn current_user(&self, identity: &IdentityState) -> DbErrorResult<Option<UserRecord>> {
        match identity.identity_id() {
            Some(identity_id) => self.repository.find_by_identity_id(identity_id).await,
            None => Ok(None),
        }
    }

    /// Change the display name of the signed-in identity's record.
    pub async fn update_profile(
        &self,
        identity: &IdentityState,
        name: Option<&str>,
    ) -> DbErrorResult<Uuid> {
        let identity_id = identity
            .identity_id()
            .ok_or_else(DbError::not_authenticated)?;

        let id = self
            .repository
            .update_name(identity_id, name)
            .await?
            .ok_or_else(|| DbError::user_not_found(identity_id))?;

        self.notify(identity_id);
        Ok(id)
    }

    /// Log a workout for the signed-in identity's record.
    pub async fn create_workout(
        &self,
        identity: &IdentityState,
        workout: NewWorkout,
    ) -> DbErrorResult<Uuid> {
        let user = self.signed_in_user(identity).await?;
        let workout = workout.validate()?;

        let workout = Workout {
            id: Uuid::new_v4(),
            user_id: user.id,
            name: workout.name,
            exercises: workout.exercises,
            duration: workout.duration,
            notes: workout.notes,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.workouts.insert(&workout).await?;

        info!("Workout {} created for user {}", workout.id, user.id);
        Ok(workout.id)
    }

    /// Workouts of the signed-in identity, newest first.
    ///
    /// Empty when nobody is signed in or the identity has no record yet.
    pub async fn user_workouts(
        &self,
        identity: &IdentityState,
        limit: Option<u32>,
    ) -> DbErrorResult<Vec<Workout>> {
        match self.current_user(identity).await? {
            Some(user) => self.workouts.list_for_user(user.id, limit).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn workout_by_id(
        &self,
        identity: &IdentityState,
        id: Uuid,
    ) -> DbErrorResult<Workout> {
        self.owned_workout(identity, id).await
    }

    pub async fn update_workout(
        &self,
        identity: &IdentityState,
        id: Uuid,
        update: WorkoutUpdate,
    ) -> DbErrorResult<Uuid> {
        let mut workout = self.owned_workout(identity, id).await?;
        update.validate()?.apply_to(&mut workout, Utc::now());
        self.workouts.update(&workout).await?;

        debug!("Workout {} updated", id);
        Ok(id)
    }

    pub async fn delete_workout(&self, identity: &IdentityState, id: Uuid) -> DbErrorResult<()> {
        self.owned_workout(identity, id).await?;
        self.workouts.delete(id).await?;

        info!("Workout {} deleted", id);
        Ok(())
    }

    /// `None` when nobody is signed in or the identity has no record yet.
    pub async fn workout_stats(
        &self,
        identity: &IdentityState,
    ) -> DbErrorResult<Option<WorkoutStats>> {
        let Some(user) = self.current_user(identity).await? else {
            return Ok(None);
        };

        let workouts = self.workouts.list_for_user(user.id, None).await?;
        Ok(Some(WorkoutStats::from_workouts(&workouts, Utc::now())))
    }

    /// Live query for the record of whoever the identity feed says is signed in.
    ///
    /// Starts `Pending`, re-runs on every identity change and on every write
    /// to the store that concerns the current identity. Signed out yields
    /// `Missing`; while the provider is initializing the value stays
    /// `Pending`. A failed query is logged and the previous value kept.
    /// The background task ends once every receiver is dropped.
    pub fn watch_current_user(
        &self,
        mut identity_rx: watch::Receiver<IdentityState>,
    ) -> watch::Receiver<RecordState> {
        let (record_tx, record_rx) = watch::channel(RecordState::Pending);
        let store = self.clone();
        let mut changes = self.changes.subscribe();

        tokio::spawn(async move {
            let mut identity_open = true;

            loop {
                let identity = identity_rx.borrow_and_update().clone();
                store.refresh(&identity, &record_tx).await;

                loop {
                    tokio::select! {
                        changed = identity_rx.changed(), if identity_open => {
                            if changed.is_err() {
                                identity_open = false;
                                continue;
                            }
                            break;
                        }
                        change = changes.recv() => match change {
                            Ok(identity_id) if identity.identity_id() != Some(identity_id.as_str()) => continue,
                            Ok(_) | Err(RecvError::Lagged(_)) => break,
                            Err(RecvError::Closed) => return,
                        },
                        _ = record_tx.closed() => return,
                    }
                }
            }
        });

        record_rx
    }

    async fn signed_in_user(&self, identity: &IdentityState) -> DbErrorResult<UserRecord> {
        let identity_id = identity
            .identity_id()
            .ok_or_else(DbError::not_authenticated)?;

        self.repository
            .find_by_identity_id(identity_id)
            .await?
            .ok_or_else(|| DbError::user_not_found(identity_id))
    }

    /// The workout, provided the signed-in identity's record owns it.
    async fn owned_workout(&self, identity: &IdentityState, id: Uuid) -> DbErrorResult<Workout> {
        let identity_id = identity
            .identity_id()
            .ok_or_else(DbError::not_authenticated)?;

        let workout = self
            .workouts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbError::workout_not_found(id))?;

        match self.repository.find_by_identity_id(identity_id).await? {
            Some(user) if workout.belongs_to(user.id) => Ok(workout),
            _ => Err(DbError::unauthorized_workout(id)),
        }
    }

    async fn refresh(&self, identity: &IdentityState, record_tx: &watch::Sender<RecordState>) {
        let next = match identity {
            IdentityState::Initializing => RecordState::Pending,
            IdentityState::SignedOut => RecordState::Missing,
            IdentityState::SignedIn(identity) => {
                match self.repository.find_by_identity_id(&identity.id).await {
                    Ok(record) => RecordState::from(record),
                    Err(e) => {
                        error!("Failed to fetch current user {}: {}", identity.id, e);
                        return;
                    }
                }
            }
        };

        record_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn notify(&self, identity_id: &str) {
        // No subscribers is fine
        let _ = self.changes.send(identity_id.to_string());
    }
}
