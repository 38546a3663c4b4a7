//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tripline_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] tripline_session::SessionError),

    #[error("API error: {0}")]
    Api(#[from] tripline_api::ApiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Admin access required")]
    AdminRequired,
}
