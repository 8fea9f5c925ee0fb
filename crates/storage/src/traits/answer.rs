use async_trait::async_trait;
use stepform_core::FormAnswer;

use crate::error::StorageError;

/// Per-question answer operations.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Insert the answer for `(session_id, question_number)` or overwrite the
    /// existing one, refreshing `saved_at`. Atomic; fails with `NotFound`
    /// when the session does not exist.
    async fn upsert_answer(
        &self,
        session_id: &str,
        question_number: i32,
        answer: &str,
    ) -> Result<FormAnswer, StorageError>;

    /// Count answers stored for a session.
    async fn count_answers(&self, session_id: &str) -> Result<usize, StorageError>;

    /// All answers for a session, ordered by question number.
    async fn list_answers(&self, session_id: &str) -> Result<Vec<FormAnswer>, StorageError>;
}
