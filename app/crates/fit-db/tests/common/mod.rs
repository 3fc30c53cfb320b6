#![allow(dead_code)]

use fit_core::{EmailAddress, Exercise, ExerciseSet, Identity, NewWorkout, ReconcileRequest};

use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    fit_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn create_test_request(identity_id: &str) -> ReconcileRequest {
    ReconcileRequest {
        identity_id: identity_id.to_string(),
        email: format!("{}@example.com", identity_id),
        name: Some("Test User".to_string()),
    }
}

pub fn create_test_identity(identity_id: &str) -> Identity {
    Identity::new(identity_id)
        .with_email(EmailAddress::primary(format!("{}@example.com", identity_id)))
        .with_display_name("Test User")
}

pub fn create_test_workout(name: &str) -> NewWorkout {
    let mut workout = NewWorkout::new(
        name,
        vec![
            Exercise::new("Squat").with_set(ExerciseSet::reps(5).with_weight(100.0)),
            Exercise::new("Plank"),
        ],
    );
    workout.duration = Some(45);
    workout
}
