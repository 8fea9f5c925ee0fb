use std::sync::Arc;

use stepform_core::{FormAnswer, FormSession, FormSnapshot};
use stepform_storage::traits::{AnswerStore, SessionStore};
use stepform_storage::StorageBackend;

use crate::error::ServiceError;

/// Outcome of a submission: the submitted session and how many answers it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub session: FormSession,
    pub answers_count: usize,
}

pub struct FormService {
    storage: Arc<StorageBackend>,
}

impl FormService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn init_form(&self) -> Result<FormSession, ServiceError> {
        let session = self.storage.create_session().await?;
        tracing::info!(session_id = %session.session_id, "form session initialized");
        Ok(session)
    }

    pub async fn save_answer(
        &self,
        session_id: &str,
        question_number: i32,
        answer: &str,
    ) -> Result<FormAnswer, ServiceError> {
        let saved = self.storage.upsert_answer(session_id, question_number, answer).await?;
        tracing::debug!(session_id, question_number, "answer saved");
        Ok(saved)
    }

    /// Mark the session submitted and count its answers. Resubmitting an
    /// already-submitted session leaves `submitted_at` untouched.
    pub async fn submit_form(&self, session_id: &str) -> Result<SubmissionReceipt, ServiceError> {
        let session = self.storage.mark_submitted(session_id).await?;
        let answers_count = self.storage.count_answers(session_id).await?;
        tracing::info!(session_id, answers_count, "form submitted");
        Ok(SubmissionReceipt { session, answers_count })
    }

    pub async fn get_form_data(&self, session_id: &str) -> Result<FormSnapshot, ServiceError> {
        Ok(self.storage.fetch_session_with_answers(session_id).await?)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use stepform_core::PoolSettings;
    use tempfile::TempDir;

    use super::*;

    async fn create_service() -> (FormService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            StorageBackend::open_sqlite(&temp_dir.path().join("forms.db"), PoolSettings::default())
                .await
                .unwrap();
        (FormService::new(Arc::new(storage)), temp_dir)
    }

    #[tokio::test]
    async fn init_then_fetch_is_open_and_empty() {
        let (service, _temp_dir) = create_service().await;

        let session = service.init_form().await.unwrap();
        let snapshot = service.get_form_data(&session.session_id).await.unwrap();

        assert_eq!(snapshot.session.session_id, session.session_id);
        assert!(!snapshot.session.is_submitted);
        assert!(snapshot.session.submitted_at.is_none());
        assert!(snapshot.answers.is_empty());
    }

    #[tokio::test]
    async fn submit_unknown_session_is_not_found() {
        let (service, _temp_dir) = create_service().await;

        let err = service.submit_form("unknown").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(service.get_form_data("unknown").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn save_answer_for_unknown_session_is_not_found() {
        let (service, _temp_dir) = create_service().await;

        let err = service.save_answer("unknown", 1, "red").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn resubmission_keeps_original_timestamp() {
        let (service, _temp_dir) = create_service().await;
        let session = service.init_form().await.unwrap();

        let first = service.submit_form(&session.session_id).await.unwrap();
        service.save_answer(&session.session_id, 1, "late").await.unwrap();
        let second = service.submit_form(&session.session_id).await.unwrap();

        assert_eq!(first.answers_count, 0);
        assert_eq!(second.answers_count, 1);
        assert_eq!(first.session.submitted_at, second.session.submitted_at);
    }

    #[tokio::test]
    async fn full_form_workflow() {
        let (service, _temp_dir) = create_service().await;
        let s = service.init_form().await.unwrap().session_id;

        let created = service.save_answer(&s, 1, "red").await.unwrap();
        let updated = service.save_answer(&s, 1, "blue").await.unwrap();
        assert_eq!(created.id, updated.id);
        service.save_answer(&s, 2, "yes").await.unwrap();

        let receipt = service.submit_form(&s).await.unwrap();
        assert_eq!(receipt.answers_count, 2);
        assert_eq!(receipt.session.session_id, s);
        assert!(receipt.session.is_submitted);

        let snapshot = service.get_form_data(&s).await.unwrap();
        assert!(snapshot.session.is_submitted);
        assert!(snapshot.session.submitted_at.is_some());
        let values: Vec<&str> = snapshot.answers.iter().map(|a| a.answer.as_str()).collect();
        assert_eq!(values, vec!["blue", "yes"]);
    }
}
