//! Tripline Core
//!
//! Wires storage, session, and the remote API into one application handle
//! with an explicit init lifecycle. Also home to the only local logic the
//! client has: form validation, list filtering, and weekly-hours display.

mod app;
mod config;
mod error;
pub mod search;
pub mod validate;

pub use app::{App, BookingForm};
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use tripline_api::models::{
    Booking, BookingStatus, BookingType, BugReport, Driver, LoginResponse, NewTrip, NewVehicle,
    SignUpRequest, Trip, User, Vehicle, WEEKDAYS,
};
pub use tripline_api::{ApiClient, ApiError};
pub use tripline_session::{SessionError, SessionState, SessionStore, SessionUser};
pub use tripline_storage::{StorageError, Store};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
