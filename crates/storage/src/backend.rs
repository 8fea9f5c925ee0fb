//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use stepform_core::{FormAnswer, FormSession, FormSnapshot, PoolSettings};

use crate::error::StorageError;
use crate::traits::{AnswerStore, SessionStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::sqlite_storage::SqliteStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
    #[cfg(feature = "sqlite")]
    Sqlite(crate::sqlite_storage::SqliteStorage),
}

impl StorageBackend {
    /// Connect to the backend selected by the URL scheme and bootstrap the schema.
    pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<Self, StorageError> {
        let scheme = database_url.split_once(':').map_or("", |(scheme, _)| scheme);
        match scheme {
            #[cfg(feature = "postgres")]
            "postgres" | "postgresql" => Self::new_postgres(database_url, settings).await,
            #[cfg(feature = "sqlite")]
            "sqlite" => Self::new_sqlite(database_url, settings).await,
            _ => Err(StorageError::UnsupportedUrl(scheme.to_owned())),
        }
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(
        database_url: &str,
        settings: PoolSettings,
    ) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url, settings).await?))
    }

    #[cfg(feature = "sqlite")]
    pub async fn new_sqlite(
        database_url: &str,
        settings: PoolSettings,
    ) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::sqlite_storage::SqliteStorage::new(database_url, settings).await?))
    }

    #[cfg(feature = "sqlite")]
    pub async fn open_sqlite(db_path: &Path, settings: PoolSettings) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::sqlite_storage::SqliteStorage::open(db_path, settings).await?))
    }

    /// Round-trip a trivial query to verify connectivity.
    pub async fn ping(&self) -> Result<(), StorageError> {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => s.ping().await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(s) => s.ping().await,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
        }
    }
}

// ── SessionStore ─────────────────────────────────────────────────

#[async_trait]
impl SessionStore for StorageBackend {
    async fn create_session(&self) -> Result<FormSession, StorageError> {
        dispatch!(self, SessionStore, create_session())
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<FormSession>, StorageError> {
        dispatch!(self, SessionStore, get_session(session_id))
    }

    async fn mark_submitted(&self, session_id: &str) -> Result<FormSession, StorageError> {
        dispatch!(self, SessionStore, mark_submitted(session_id))
    }

    async fn fetch_session_with_answers(
        &self,
        session_id: &str,
    ) -> Result<FormSnapshot, StorageError> {
        dispatch!(self, SessionStore, fetch_session_with_answers(session_id))
    }
}

// ── AnswerStore ──────────────────────────────────────────────────

#[async_trait]
impl AnswerStore for StorageBackend {
    async fn upsert_answer(
        &self,
        session_id: &str,
        question_number: i32,
        answer: &str,
    ) -> Result<FormAnswer, StorageError> {
        dispatch!(self, AnswerStore, upsert_answer(session_id, question_number, answer))
    }

    async fn count_answers(&self, session_id: &str) -> Result<usize, StorageError> {
        dispatch!(self, AnswerStore, count_answers(session_id))
    }

    async fn list_answers(&self, session_id: &str) -> Result<Vec<FormAnswer>, StorageError> {
        dispatch!(self, AnswerStore, list_answers(session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_scheme_is_rejected() {
        let err = StorageBackend::connect("mysql://localhost/forms", PoolSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedUrl(ref s) if s == "mysql"));
    }
}
