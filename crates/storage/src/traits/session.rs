use async_trait::async_trait;
use stepform_core::{FormSession, FormSnapshot};

use crate::error::StorageError;

/// Form session lifecycle operations.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create an open session under a freshly generated session id.
    async fn create_session(&self) -> Result<FormSession, StorageError>;

    /// Get session by its external session id.
    async fn get_session(&self, session_id: &str) -> Result<Option<FormSession>, StorageError>;

    /// Mark a session submitted. Already-submitted sessions keep their
    /// original `submitted_at`. Fails with `NotFound` for unknown sessions.
    async fn mark_submitted(&self, session_id: &str) -> Result<FormSession, StorageError>;

    /// Load a session and all its answers (ordered by question number)
    /// in one transaction. Fails with `NotFound` for unknown sessions.
    async fn fetch_session_with_answers(
        &self,
        session_id: &str,
    ) -> Result<FormSnapshot, StorageError>;
}
