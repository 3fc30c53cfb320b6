//! Workout repository over `fit_workouts`.
//!
//! Exercises are stored as a JSON array in a single column. Ownership is
//! not checked here; `UserStore` does that against the signed-in identity.

use crate::{DbError, Result as DbErrorResult};

use fit_core::{Exercise, Workout};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "fit_workouts";

pub struct WorkoutRepository {
    pool: SqlitePool,
}

impl WorkoutRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, workout: &Workout) -> DbErrorResult<()> {
        let exercises = serde_json::to_string(&workout.exercises)?;

        sqlx::query(
            r#"
                INSERT INTO fit_workouts (
                    id, user_id, name, exercises, duration, notes, created_at, updated_at
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(workout.id.to_string())
        .bind(workout.user_id.to_string())
        .bind(&workout.name)
        .bind(exercises)
        .bind(workout.duration.map(i64::from))
        .bind(&workout.notes)
        .bind(workout.created_at.timestamp_millis())
        .bind(workout.updated_at.map(|t| t.timestamp_millis()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Workout>> {
        let row = sqlx::query(
            r#"
                SELECT id, user_id, name, exercises, duration, notes, created_at, updated_at
                FROM fit_workouts
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_workout).transpose()
    }

    /// Newest first. `None` or `Some(0)` returns every workout.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: Option<u32>,
    ) -> DbErrorResult<Vec<Workout>> {
        // SQLite treats a negative LIMIT as no limit
        let limit = limit.filter(|n| *n > 0).map_or(-1, i64::from);

        let rows = sqlx::query(
            r#"
                SELECT id, user_id, name, exercises, duration, notes, created_at, updated_at
                FROM fit_workouts
                WHERE user_id = ?
                ORDER BY created_at DESC, rowid DESC
                LIMIT ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Write every mutable column of `workout`.
    pub async fn update(&self, workout: &Workout) -> DbErrorResult<()> {
        let exercises = serde_json::to_string(&workout.exercises)?;

        let result = sqlx::query(
            r#"
                UPDATE fit_workouts
                SET name = ?, exercises = ?, duration = ?, notes = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&workout.name)
        .bind(exercises)
        .bind(workout.duration.map(i64::from))
        .bind(&workout.notes)
        .bind(workout.updated_at.map(|t| t.timestamp_millis()))
        .bind(workout.id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::workout_not_found(workout.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM fit_workouts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::workout_not_found(id));
        }

        Ok(())
    }
}

fn row_to_workout(row: &SqliteRow) -> DbErrorResult<Workout> {
    let exercises: String = row.try_get("exercises")?;
    let exercises: Vec<Exercise> = serde_json::from_str(&exercises)
        .map_err(|e| DbError::invalid_row(TABLE, format!("Invalid exercises JSON: {}", e)))?;

    Ok(Workout {
        id: parse_uuid(row.try_get::<String, _>("id")?.as_str(), "id")?,
        user_id: parse_uuid(row.try_get::<String, _>("user_id")?.as_str(), "user_id")?,
        name: row.try_get("name")?,
        exercises,
        duration: parse_minutes(row.try_get("duration")?)?,
        notes: row.try_get("notes")?,
        created_at: parse_millis(row.try_get("created_at")?, "created_at")?,
        updated_at: row
            .try_get::<Option<i64>, _>("updated_at")?
            .map(|v| parse_millis(v, "updated_at"))
            .transpose()?,
    })
}

#[track_caller]
fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::invalid_row(TABLE, format!("Invalid UUID in {}: {}", column, e)))
}

#[track_caller]
fn parse_millis(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| DbError::invalid_row(TABLE, format!("Invalid timestamp in {}", column)))
}

#[track_caller]
fn parse_minutes(value: Option<i64>) -> DbErrorResult<Option<u32>> {
    value
        .map(|v| {
            u32::try_from(v)
                .map_err(|_| DbError::invalid_row(TABLE, format!("Invalid duration: {}", v)))
        })
        .transpose()
}
