//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (missing session, duplicate,
//! transient DB errors) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be converted into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema bootstrap failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// Database URL scheme matches no compiled-in backend.
    #[error("unsupported database url: {0}")]
    UnsupportedUrl(String),
}

impl StorageError {
    pub(crate) fn session_not_found(session_id: &str) -> Self {
        Self::NotFound { entity: "form session", id: session_id.to_owned() }
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Custom `From<sqlx::Error>`, not a blanket `#[from]`.
///
/// - `RowNotFound` -> `NotFound` (generic; callers remap with entity context)
/// - unique violation -> `Duplicate`
/// - everything else -> `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Duplicate(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}

/// Map a failed answer write. A foreign-key violation means the referenced
/// session does not exist.
pub(crate) fn answer_write_error(err: sqlx::Error, session_id: &str) -> StorageError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            StorageError::session_not_found(session_id)
        },
        _ => err.into(),
    }
}

impl From<std::num::TryFromIntError> for StorageError {
    fn from(err: std::num::TryFromIntError) -> Self {
        Self::DataCorruption { context: "integer column out of range".to_owned(), source: Box::new(err) }
    }
}
