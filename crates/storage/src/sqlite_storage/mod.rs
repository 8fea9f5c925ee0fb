//! SQLite storage backend using sqlx.
//!
//! Same schema and semantics as the PostgreSQL backend. WAL journal, foreign
//! keys on, and a busy timeout so concurrent writers queue instead of failing.

mod answers;
mod sessions;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row, SqlitePool};
use stepform_core::{FormAnswer, FormSession, PoolSettings, SQLITE_BUSY_TIMEOUT_SECS};

use crate::error::StorageError;
use crate::sqlite_migrations::run_sqlite_migrations;

#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Connect using a `sqlite:` URL, creating the file if missing.
    pub async fn new(database_url: &str, settings: PoolSettings) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?;
        Self::connect_with(options, settings).await
    }

    /// Open (or create) a database file at `db_path`.
    pub async fn open(db_path: &Path, settings: PoolSettings) -> Result<Self, StorageError> {
        Self::connect_with(SqliteConnectOptions::new().filename(db_path), settings).await
    }

    async fn connect_with(
        options: SqliteConnectOptions,
        settings: PoolSettings,
    ) -> Result<Self, StorageError> {
        let options = options
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(SQLITE_BUSY_TIMEOUT_SECS));
        // Pooled connections cache the schema they saw when opened, so the
        // schema must exist before the first one connects.
        let mut conn = options.connect().await?;
        run_sqlite_migrations(&mut conn)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        conn.close().await?;

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .connect_with(options)
            .await?;
        tracing::info!("SqliteStorage initialized");
        Ok(Self { pool })
    }

    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

pub(crate) const SESSION_COLUMNS: &str = "id, session_id, created_at, submitted_at, is_submitted";

pub(crate) const ANSWER_COLUMNS: &str = "id, session_id, question_number, answer, saved_at";

pub(crate) fn row_to_session(row: &SqliteRow) -> Result<FormSession, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let submitted_at: Option<DateTime<Utc>> = row.try_get("submitted_at")?;
    let is_submitted: i64 = row.try_get("is_submitted")?;
    Ok(FormSession::new(
        row.try_get("id")?,
        row.try_get("session_id")?,
        created_at,
        submitted_at,
        is_submitted != 0,
    ))
}

pub(crate) fn row_to_answer(row: &SqliteRow) -> Result<FormAnswer, StorageError> {
    let saved_at: DateTime<Utc> = row.try_get("saved_at")?;
    let question_number: i64 = row.try_get("question_number")?;
    Ok(FormAnswer::new(
        row.try_get("id")?,
        row.try_get("session_id")?,
        i32::try_from(question_number)?,
        row.try_get("answer")?,
        saved_at,
    ))
}
