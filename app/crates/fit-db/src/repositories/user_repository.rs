//! User repository: one row per identity in `fit_users`.
//!
//! `upsert` is the backend half of reconciliation. It runs as a single
//! `INSERT ... ON CONFLICT(identity_id) DO UPDATE` statement, so two
//! concurrent calls for the same identity still leave exactly one row and
//! both return its id. The row keeps its `id` and `created_at` across
//! updates; `email`, `name` and `updated_at` always take the latest values.

use crate::{DbError, Result as DbErrorResult};

use fit_core::{ReconcileRequest, UserRecord};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "fit_users";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the record for `request.identity_id`, or refresh it if present.
    pub async fn upsert(&self, request: &ReconcileRequest) -> DbErrorResult<Uuid> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp_millis();

        let row = sqlx::query(
            r#"
                INSERT INTO fit_users (id, identity_id, email, name, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(identity_id) DO UPDATE SET
                    email = excluded.email,
                    name = excluded.name,
                    updated_at = excluded.updated_at
                RETURNING id
            "#,
        )
        .bind(&id)
        .bind(&request.identity_id)
        .bind(&request.email)
        .bind(&request.name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        parse_uuid(row.try_get::<String, _>("id")?.as_str(), "id")
    }

    pub async fn find_by_identity_id(&self, identity_id: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, identity_id, email, name, created_at, updated_at
                FROM fit_users
                WHERE identity_id = ?
            "#,
        )
        .bind(identity_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, identity_id, email, name, created_at, updated_at
                FROM fit_users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Set the display name. Returns `None` when the identity has no record.
    pub async fn update_name(
        &self,
        identity_id: &str,
        name: Option<&str>,
    ) -> DbErrorResult<Option<Uuid>> {
        let now = Utc::now().timestamp_millis();

        let row = sqlx::query(
            r#"
                UPDATE fit_users
                SET name = ?, updated_at = ?
                WHERE identity_id = ?
                RETURNING id
            "#,
        )
        .bind(name)
        .bind(now)
        .bind(identity_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| parse_uuid(r.try_get::<String, _>("id")?.as_str(), "id"))
            .transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fit_users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn row_to_user(row: &SqliteRow) -> DbErrorResult<UserRecord> {
    Ok(UserRecord {
        id: parse_uuid(row.try_get::<String, _>("id")?.as_str(), "id")?,
        identity_id: row.try_get("identity_id")?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        created_at: parse_millis(row.try_get("created_at")?, "created_at")?,
        updated_at: parse_millis(row.try_get("updated_at")?, "updated_at")?,
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
