use std::sync::Arc;

use super::create_test_storage;
use crate::traits::{AnswerStore, SessionStore};

#[tokio::test]
async fn first_save_creates_row() {
    let (storage, _temp_dir) = create_test_storage().await;
    let session = storage.create_session().await.unwrap();

    let saved = storage.upsert_answer(&session.session_id, 1, "red").await.unwrap();

    assert_eq!(saved.session_id, session.session_id);
    assert_eq!(saved.question_number, 1);
    assert_eq!(saved.answer, "red");
    assert_eq!(storage.count_answers(&session.session_id).await.unwrap(), 1);
}

#[tokio::test]
async fn second_save_for_same_question_updates_in_place() {
    let (storage, _temp_dir) = create_test_storage().await;
    let session = storage.create_session().await.unwrap();
    let id = session.session_id.as_str();

    let first = storage.upsert_answer(id, 1, "red").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = storage.upsert_answer(id, 1, "blue").await.unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.answer, "blue");
    assert!(second.saved_at > first.saved_at);

    let answers = storage.list_answers(id).await.unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].answer, "blue");
    assert_eq!(answers[0].saved_at, second.saved_at);
}

#[tokio::test]
async fn distinct_questions_get_independent_rows() {
    let (storage, _temp_dir) = create_test_storage().await;
    let session = storage.create_session().await.unwrap();
    let id = session.session_id.as_str();

    storage.upsert_answer(id, 1, "red").await.unwrap();
    storage.upsert_answer(id, 2, "yes").await.unwrap();

    let answers = storage.list_answers(id).await.unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].answer, "red");
    assert_eq!(answers[1].answer, "yes");
}

#[tokio::test]
async fn answers_are_scoped_to_their_session() {
    let (storage, _temp_dir) = create_test_storage().await;
    let a = storage.create_session().await.unwrap();
    let b = storage.create_session().await.unwrap();

    storage.upsert_answer(&a.session_id, 1, "from a").await.unwrap();
    storage.upsert_answer(&b.session_id, 1, "from b").await.unwrap();

    assert_eq!(storage.count_answers(&a.session_id).await.unwrap(), 1);
    assert_eq!(storage.list_answers(&b.session_id).await.unwrap()[0].answer, "from b");
}

#[tokio::test]
async fn save_for_unknown_session_is_not_found() {
    let (storage, _temp_dir) = create_test_storage().await;

    let err = storage.upsert_answer("ghost-session", 1, "boo").await.unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err:?}");
    assert_eq!(storage.count_answers("ghost-session").await.unwrap(), 0);
}

#[tokio::test]
async fn unusual_question_numbers_and_empty_answers_are_accepted() {
    let (storage, _temp_dir) = create_test_storage().await;
    let session = storage.create_session().await.unwrap();
    let id = session.session_id.as_str();

    storage.upsert_answer(id, -4, "").await.unwrap();
    storage.upsert_answer(id, i32::MAX, &"x".repeat(10_000)).await.unwrap();

    let answers = storage.list_answers(id).await.unwrap();
    assert_eq!(answers[0].question_number, -4);
    assert_eq!(answers[0].answer, "");
    assert_eq!(answers[1].question_number, i32::MAX);
    assert_eq!(answers[1].answer.len(), 10_000);
}

#[tokio::test]
async fn answers_can_still_be_saved_after_submission() {
    let (storage, _temp_dir) = create_test_storage().await;
    let session = storage.create_session().await.unwrap();
    let id = session.session_id.as_str();

    storage.mark_submitted(id).await.unwrap();
    storage.upsert_answer(id, 1, "late").await.unwrap();

    assert_eq!(storage.count_answers(id).await.unwrap(), 1);
}

#[tokio::test]
async fn concurrent_saves_for_same_question_leave_one_row() {
    let (storage, _temp_dir) = create_test_storage().await;
    let storage = Arc::new(storage);
    let session = storage.create_session().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let storage = Arc::clone(&storage);
        let id = session.session_id.clone();
        handles.push(tokio::spawn(async move {
            storage.upsert_answer(&id, 1, &format!("value-{i}")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let answers = storage.list_answers(&session.session_id).await.unwrap();
    assert_eq!(answers.len(), 1);
    assert!(answers[0].answer.starts_with("value-"));
}
