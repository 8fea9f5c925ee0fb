//! Test utilities and module declarations for storage tests.

use crate::StorageBackend;
use stepform_core::PoolSettings;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn create_test_storage() -> (StorageBackend, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = StorageBackend::open_sqlite(&db_path, PoolSettings::default()).await.unwrap();
    (storage, temp_dir)
}

mod answer_tests;

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn reopening_existing_database_keeps_rows() {
    use crate::traits::SessionStore;

    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");
    let first = StorageBackend::open_sqlite(&db_path, PoolSettings::default()).await.unwrap();
    let session = first.create_session().await.unwrap();
    drop(first);

    let second = StorageBackend::open_sqlite(&db_path, PoolSettings::default()).await.unwrap();
    assert!(second.get_session(&session.session_id).await.unwrap().is_some());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn connect_accepts_sqlite_url() {
    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("url.db").display());
    let storage = StorageBackend::connect(&url, PoolSettings::default()).await.unwrap();
    assert_eq!(storage.kind(), "sqlite");
    storage.ping().await.unwrap();
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn upsert_is_usable_as_first_statement_on_fresh_database() {
    use crate::traits::{AnswerStore, SessionStore};

    let temp_dir = TempDir::new().unwrap();
    let storage =
        StorageBackend::open_sqlite(&temp_dir.path().join("fresh.db"), PoolSettings::default())
            .await
            .unwrap();

    let err = storage.upsert_answer("ghost-session", 1, "boo").await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");

    let session = storage.create_session().await.unwrap();
    let saved = storage.upsert_answer(&session.session_id, 1, "red").await.unwrap();
    assert_eq!(saved.answer, "red");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn upsert_is_usable_as_first_statement_after_url_connect() {
    use crate::traits::AnswerStore;

    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("fresh-url.db").display());
    let storage = StorageBackend::connect(&url, PoolSettings::default()).await.unwrap();

    let err = storage.upsert_answer("ghost-session", 1, "boo").await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
}
