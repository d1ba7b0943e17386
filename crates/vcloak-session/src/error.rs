//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] vcloak_storage::StorageError),

    #[error("Stored {key} is corrupted: {source}")]
    DataCorruption {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
