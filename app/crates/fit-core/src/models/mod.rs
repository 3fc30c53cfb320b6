pub mod email_address;
pub mod identity;
pub mod identity_state;
pub mod reconcile_request;
pub mod record_state;
pub mod sync_snapshot;
pub mod sync_status;
pub mod user_record;
pub mod workout;
pub mod workout_stats;
