//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("User record does not contain a userID")]
    MissingUserId,

    #[error("Storage error: {0}")]
    Storage(#[from] tripline_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
