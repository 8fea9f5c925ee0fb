//! Typed error enum for the service layer.

use stepform_storage::StorageError;
use thiserror::Error;

/// Service-layer error. Wraps storage failures so callers can branch on
/// not-found vs. everything else.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
        }
    }

    /// Whether the referenced form session does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }

    /// Message of the underlying failure without the layer prefixes.
    pub fn detail(&self) -> String {
        match self {
            Self::Storage(StorageError::Database(e)) => e.to_string(),
            Self::Storage(StorageError::Duplicate(msg) | StorageError::Migration(msg)) => {
                msg.clone()
            },
            Self::Storage(StorageError::DataCorruption { source, .. }) => source.to_string(),
            Self::Storage(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_passes_database_message_through() {
        let err = ServiceError::Storage(StorageError::Database(sqlx::Error::PoolTimedOut));

        assert_eq!(err.detail(), sqlx::Error::PoolTimedOut.to_string());
        assert!(err.is_transient());
    }

    #[test]
    fn detail_strips_migration_prefix() {
        let err = ServiceError::Storage(StorageError::Migration("relation missing".to_owned()));

        assert_eq!(err.detail(), "relation missing");
        assert_eq!(err.to_string(), "storage: migration error: relation missing");
    }

    #[test]
    fn detail_keeps_not_found_message() {
        let err = ServiceError::Storage(StorageError::NotFound {
            entity: "form session",
            id: "abc".to_owned(),
        });

        assert_eq!(err.detail(), "not found: form session with id abc");
    }
}
