//! SessionStore implementation for SqliteStorage.

use super::*;

use crate::error::StorageError;
use crate::traits::SessionStore;
use async_trait::async_trait;
use stepform_core::{new_session_id, FormSnapshot};

#[async_trait]
impl SessionStore for SqliteStorage {
    async fn create_session(&self) -> Result<FormSession, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO form_sessions (session_id, created_at, submitted_at, is_submitted)
             VALUES (?1, ?2, NULL, 0)
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(new_session_id())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        row_to_session(&row)
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<FormSession>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM form_sessions WHERE session_id = ?1"
        ))
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_session(&r)).transpose()
    }

    async fn mark_submitted(&self, session_id: &str) -> Result<FormSession, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE form_sessions
             SET is_submitted = 1, submitted_at = COALESCE(submitted_at, ?2)
             WHERE session_id = ?1
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(session_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(r) => row_to_session(&r),
            None => Err(StorageError::session_not_found(session_id)),
        }
    }

    async fn fetch_session_with_answers(
        &self,
        session_id: &str,
    ) -> Result<FormSnapshot, StorageError> {
        let mut tx = self.pool.begin().await?;
        let session = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM form_sessions WHERE session_id = ?1"
        ))
        .bind(session_id)
        .fetch_optional(&mut *tx)
        .await?
        .map(|r| row_to_session(&r))
        .transpose()?
        .ok_or_else(|| StorageError::session_not_found(session_id))?;

        let rows = sqlx::query(&format!(
            "SELECT {ANSWER_COLUMNS} FROM form_answers
             WHERE session_id = ?1
             ORDER BY question_number ASC"
        ))
        .bind(session_id)
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        let answers = rows.iter().map(row_to_answer).collect::<Result<Vec<_>, _>>()?;
        Ok(FormSnapshot::new(session, answers))
    }
}
