//! AnswerStore implementation for SqliteStorage.

use super::*;

use crate::error::{answer_write_error, StorageError};
use crate::traits::AnswerStore;
use async_trait::async_trait;

#[async_trait]
impl AnswerStore for SqliteStorage {
    async fn upsert_answer(
        &self,
        session_id: &str,
        question_number: i32,
        answer: &str,
    ) -> Result<FormAnswer, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO form_answers (session_id, question_number, answer, saved_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (session_id, question_number) DO UPDATE SET
               answer = excluded.answer,
               saved_at = excluded.saved_at
             RETURNING {ANSWER_COLUMNS}"
        ))
        .bind(session_id)
        .bind(question_number)
        .bind(answer)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| answer_write_error(e, session_id))?;
        row_to_answer(&row)
    }

    async fn count_answers(&self, session_id: &str) -> Result<usize, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM form_answers WHERE session_id = ?1")
            .bind(session_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count)?)
    }

    async fn list_answers(&self, session_id: &str) -> Result<Vec<FormAnswer>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {ANSWER_COLUMNS} FROM form_answers
             WHERE session_id = ?1
             ORDER BY question_number ASC"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_answer).collect()
    }
}
