pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::email_address::EmailAddress;
pub use models::identity::Identity;
pub use models::identity_state::IdentityState;
pub use models::reconcile_request::{NO_EMAIL_MESSAGE, ReconcileRequest};
pub use models::record_state::RecordState;
pub use models::sync_snapshot::SyncSnapshot;
pub use models::sync_status::SyncStatus;
pub use models::user_record::UserRecord;
pub use models::workout::{Exercise, ExerciseSet, NewWorkout, Workout, WorkoutUpdate};
pub use models::workout_stats::WorkoutStats;

#[cfg(test)]
mod tests;
