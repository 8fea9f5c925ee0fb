//! PostgreSQL schema bootstrap for stepform storage.

use sqlx::PgPool;

/// Create tables and indexes if they do not exist yet.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS form_sessions (
            id BIGSERIAL PRIMARY KEY,
            session_id VARCHAR(36) NOT NULL UNIQUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            submitted_at TIMESTAMPTZ,
            is_submitted INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS form_answers (
            id BIGSERIAL PRIMARY KEY,
            session_id VARCHAR(36) NOT NULL REFERENCES form_sessions (session_id),
            question_number INTEGER NOT NULL,
            answer TEXT NOT NULL,
            saved_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // One answer per question per session; backs the ON CONFLICT upsert.
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_form_answers_session_question
         ON form_answers (session_id, question_number)",
    )
    .execute(pool)
    .await?;

    tracing::debug!("PostgreSQL schema verified");
    Ok(())
}
