//! SQLite schema bootstrap for stepform storage.

use sqlx::SqliteConnection;

/// Create tables and indexes if they do not exist yet. Runs on a dedicated
/// connection before the pool is opened.
pub async fn run_sqlite_migrations(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS form_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL,
            submitted_at TEXT,
            is_submitted INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS form_answers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id TEXT NOT NULL REFERENCES form_sessions (session_id),
            question_number INTEGER NOT NULL,
            answer TEXT NOT NULL,
            saved_at TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_form_answers_session_question
         ON form_answers (session_id, question_number)",
    )
    .execute(&mut *conn)
    .await?;

    tracing::debug!("SQLite schema verified");
    Ok(())
}
