//! Tripline Storage Layer
//!
//! SQLite-based key-value persistence. The application stores small JSON
//! blobs under fixed keys; this layer only guarantees the blobs survive
//! process restarts.

mod error;
mod migrations;
mod store;

pub use error::StorageError;
pub use store::Store;

pub type Result<T> = std::result::Result<T, StorageError>;
