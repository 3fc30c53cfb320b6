use crate::{Exercise, ExerciseSet, Workout, WorkoutStats};

use chrono::{DateTime, Duration, TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn workout(created_at: DateTime<Utc>, exercises: usize, duration: Option<u32>) -> Workout {
    Workout {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "Session".to_string(),
        exercises: (0..exercises)
            .map(|i| Exercise::new(format!("Exercise {i}")).with_set(ExerciseSet::reps(10)))
            .collect(),
        duration,
        notes: None,
        created_at,
        updated_at: None,
    }
}

#[test]
fn given_no_workouts_then_all_zero() {
    let stats = WorkoutStats::from_workouts(&[], Utc::now());

    assert_that!(stats, eq(&WorkoutStats::default()));
}

#[test]
fn given_mixed_workouts_then_totals_and_average() {
    // Given
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    let workouts = vec![
        workout(now - Duration::days(1), 3, Some(60)),
        workout(now - Duration::days(10), 2, None),
        workout(now - Duration::days(45), 1, Some(30)),
    ];

    // When
    let stats = WorkoutStats::from_workouts(&workouts, now);

    // Then
    assert_that!(stats.total_workouts, eq(3u64));
    assert_that!(stats.total_exercises, eq(6u64));
    assert_that!(stats.total_duration, eq(90u64));
    assert_that!(stats.recent_workouts, eq(2u64));
    assert_that!(stats.average_workout_duration, eq(30.0));
}

#[test]
fn given_workout_exactly_thirty_days_old_then_not_recent() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();

    let stats = WorkoutStats::from_workouts(&[workout(now - Duration::days(30), 1, None)], now);

    assert_that!(stats.recent_workouts, eq(0u64));
}
