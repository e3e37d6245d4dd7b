use thiserror::Error;

/// Failure of a persistence operation.
///
/// None of these reach the user: loads fall back to defaults and saves are
/// logged by the save queue.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not create data directory {path}: {source}")]
    DataDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open snapshot store: {0}")]
    Open(#[source] sqlx::Error),

    #[error("snapshot query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("could not encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored snapshot is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;
