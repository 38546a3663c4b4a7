//! Wire models for the booking service
//!
//! Field names mirror the remote API exactly (via serde renames); these
//! types are fully defined by the server's responses and are never
//! persisted locally.

mod booking;
mod driver;
mod report;
mod trip;
mod user;
mod vehicle;

pub use booking::{Booking, BookingStatus, BookingType};
pub use driver::Driver;
pub use report::BugReport;
pub use trip::{NewTrip, Trip, WEEKDAYS};
pub use user::{LoginRequest, LoginResponse, SignUpRequest, User};
pub use vehicle::{NewVehicle, Vehicle};
