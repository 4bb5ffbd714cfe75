use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the persistence layer and the [`crate::tracker::Tracker`]
/// facade. Callers are expected to branch on the variant for user-facing
/// messaging; the core never retries or recovers internally.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid reading: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying device storage is full (SQLITE_FULL).
    #[error("device storage is full")]
    QuotaExceeded,

    #[error("storage failure: {0}")]
    Storage(#[source] rusqlite::Error),

    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failure: {0}")]
    Serde(#[from] serde_json::Error),

    /// A stored row no longer parses (e.g. a mangled timestamp).
    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("database worker terminated unexpectedly")]
    WorkerGone,
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::DiskFull => {
                StoreError::QuotaExceeded
            }
            other => StoreError::Storage(other),
        }
    }
}
