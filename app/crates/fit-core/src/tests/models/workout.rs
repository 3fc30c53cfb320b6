use crate::{CoreError, Exercise, ExerciseSet, NewWorkout, Workout, WorkoutUpdate};

use chrono::{TimeZone, Utc};
use googletest::matchers::is_empty as empty;
use googletest::prelude::*;
use uuid::Uuid;

fn squat() -> Exercise {
    Exercise::new("Squat").with_set(ExerciseSet::reps(5).with_weight(100.0))
}

fn validation_message(error: CoreError) -> String {
    match error {
        CoreError::Validation { message, .. } => message,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn given_padded_name_when_validated_then_trimmed() {
    let workout = NewWorkout::new("  Leg day ", vec![squat()]).validate().unwrap();

    assert_that!(workout.name.as_str(), eq("Leg day"));
}

#[test]
fn given_blank_name_when_validated_then_rejected() {
    let error = NewWorkout::new("   ", vec![squat()]).validate().unwrap_err();

    assert_that!(
        validation_message(error).as_str(),
        eq("Workout name cannot be empty")
    );
}

#[test]
fn given_no_exercises_when_validated_then_rejected() {
    let error = NewWorkout::new("Leg day", Vec::new()).validate().unwrap_err();

    assert_that!(
        validation_message(error).as_str(),
        eq("Workout must contain at least one exercise")
    );
}

#[test]
fn given_update_with_empty_exercise_list_then_rejected() {
    let update = WorkoutUpdate {
        exercises: Some(Vec::new()),
        ..Default::default()
    };

    assert_that!(update.validate(), err(anything()));
}

#[test]
fn given_update_without_fields_then_valid() {
    assert_that!(WorkoutUpdate::default().validate(), ok(anything()));
}

#[test]
fn given_partial_update_when_applied_then_only_named_fields_change() {
    // Given
    let created_at = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();
    let mut workout = Workout {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "Leg day".to_string(),
        exercises: vec![squat()],
        duration: Some(45),
        notes: Some("felt strong".to_string()),
        created_at,
        updated_at: None,
    };
    let now = Utc.with_ymd_and_hms(2026, 10, 2, 8, 0, 0).unwrap();

    // When
    WorkoutUpdate {
        name: Some("Legs".to_string()),
        ..Default::default()
    }
    .apply_to(&mut workout, now);

    // Then
    assert_that!(workout.name.as_str(), eq("Legs"));
    assert_that!(workout.duration, some(eq(45u32)));
    assert_that!(workout.notes.as_deref(), some(eq("felt strong")));
    assert_that!(workout.exercises.len(), eq(1usize));
    assert_that!(workout.updated_at, some(eq(now)));
}

#[test]
fn given_exercise_without_sets_when_deserialized_then_sets_empty() {
    let exercise: Exercise = serde_json::from_str(r#"{"name":"Plank","notes":null}"#).unwrap();

    assert_that!(exercise.sets, empty());
}
