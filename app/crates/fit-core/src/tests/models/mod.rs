mod identity;
mod reconcile_request;
mod record_state;
mod sync_status;
mod sync_snapshot;
mod workout;
mod workout_stats;
