//! Tripline API Client
//!
//! Typed, stateless client for the remote booking service. Every method is
//! a single request/response pair; the server owns all entities and this
//! crate never caches them.

mod bookings;
mod client;
mod drivers;
mod error;
pub mod models;
mod reports;
mod trips;
mod users;
mod vehicles;

pub use client::ApiClient;
pub use error::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;
