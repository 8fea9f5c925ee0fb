//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by table.

mod answers;
mod sessions;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use stepform_core::{FormAnswer, FormSession, PoolSettings};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str, settings: PoolSettings) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

pub(crate) const SESSION_COLUMNS: &str = "id, session_id, created_at, submitted_at, is_submitted";

pub(crate) const ANSWER_COLUMNS: &str = "id, session_id, question_number, answer, saved_at";

pub(crate) fn row_to_session(row: &PgRow) -> Result<FormSession, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let submitted_at: Option<DateTime<Utc>> = row.try_get("submitted_at")?;
    let is_submitted: i32 = row.try_get("is_submitted")?;
    Ok(FormSession::new(
        row.try_get("id")?,
        row.try_get("session_id")?,
        created_at,
        submitted_at,
        is_submitted != 0,
    ))
}

pub(crate) fn row_to_answer(row: &PgRow) -> Result<FormAnswer, StorageError> {
    let saved_at: DateTime<Utc> = row.try_get("saved_at")?;
    Ok(FormAnswer::new(
        row.try_get("id")?,
        row.try_get("session_id")?,
        row.try_get("question_number")?,
        row.try_get("answer")?,
        saved_at,
    ))
}
