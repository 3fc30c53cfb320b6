use crate::Workout;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const RECENT_WINDOW_DAYS: i64 = 30;

/// Totals over all of a user's workouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStats {
    pub total_workouts: u64,
    pub total_exercises: u64,
    /// Minutes; workouts without a duration count as zero
    pub total_duration: u64,
    /// Workouts created within the last 30 days
    pub recent_workouts: u64,
    pub average_workout_duration: f64,
}

impl WorkoutStats {
    pub fn from_workouts(workouts: &[Workout], now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);

        let total_workouts = workouts.len() as u64;
        let total_exercises = workouts
            .iter()
            .map(|w| w.exercises.len() as u64)
            .sum::<u64>();
        let total_duration = workouts
            .iter()
            .map(|w| u64::from(w.duration.unwrap_or(0)))
            .sum::<u64>();
        let recent_workouts = workouts.iter().filter(|w| w.created_at > cutoff).count() as u64;

        let average_workout_duration = if total_workouts > 0 {
            total_duration as f64 / total_workouts as f64
        } else {
            0.0
        };

        Self {
            total_workouts,
            total_exercises,
            total_duration,
            recent_workouts,
            average_workout_duration,
        }
    }
}
