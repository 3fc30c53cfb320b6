//! Workouts logged by a user.

use crate::{CoreError, Result as CoreResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub reps: u32,
    pub weight: Option<f64>,
    /// Seconds, for time-based exercises
    pub duration: Option<u32>,
    /// For cardio exercises
    pub distance: Option<f64>,
    /// Rest after the set in seconds
    pub rest_time: Option<u32>,
}

impl ExerciseSet {
    pub fn reps(reps: u32) -> Self {
        Self {
            reps,
            weight: None,
            duration: None,
            distance: None,
            rest_time: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
    pub notes: Option<String>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
            notes: None,
        }
    }

    pub fn with_set(mut self, set: ExerciseSet) -> Self {
        self.sets.push(set);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    /// Owning `UserRecord`
    pub user_id: Uuid,
    pub name: String,
    pub exercises: Vec<Exercise>,
    /// Total length in minutes
    pub duration: Option<u32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set once the workout has been edited
    pub updated_at: Option<DateTime<Utc>>,
}

impl Workout {
    pub fn belongs_to(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Arguments for logging a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
}

impl NewWorkout {
    pub fn new(name: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        Self {
            name: name.into(),
            exercises,
            duration: None,
            notes: None,
        }
    }

    /// Exercises are checked before the name. On success the name is trimmed.
    pub fn validate(mut self) -> CoreResult<Self> {
        validate_exercises(&self.exercises)?;
        self.name = validate_name(&self.name)?;
        Ok(self)
    }
}

/// Partial edit; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutUpdate {
    pub name: Option<String>,
    pub exercises: Option<Vec<Exercise>>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
}

impl WorkoutUpdate {
    pub fn validate(mut self) -> CoreResult<Self> {
        if let Some(ref name) = self.name {
            self.name = Some(validate_name(name)?);
        }

        if let Some(ref exercises) = self.exercises {
            validate_exercises(exercises)?;
        }

        Ok(self)
    }

    /// Apply the edit, stamping `updated_at`.
    pub fn apply_to(self, workout: &mut Workout, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            workout.name = name;
        }
        if let Some(exercises) = self.exercises {
            workout.exercises = exercises;
        }
        if self.duration.is_some() {
            workout.duration = self.duration;
        }
        if self.notes.is_some() {
            workout.notes = self.notes;
        }
        workout.updated_at = Some(now);
    }
}

#[track_caller]
fn validate_name(name: &str) -> CoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("Workout name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

#[track_caller]
fn validate_exercises(exercises: &[Exercise]) -> CoreResult<()> {
    if exercises.is_empty() {
        return Err(CoreError::validation(
            "Workout must contain at least one exercise",
        ));
    }
    Ok(())
}
