//! Main application handle
//!
//! Owns configuration, storage, the session store, and the API client.
//! Commands go through here so that login gating and validation happen in
//! one place.

use chrono::{DateTime, Utc};
use rand::Rng;

use tripline_api::models::{
    Booking, BookingStatus, BookingType, BugReport, SignUpRequest, Trip, User, Vehicle,
};
use tripline_api::ApiClient;
use tripline_session::{SessionStore, SessionUser};
use tripline_storage::Store;

use crate::config::Config;
use crate::error::CoreError;
use crate::{search, validate, Result};

/// Booking request as gathered from the user, before submission.
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub vehicle_id: i64,
    pub booking_type_id: Option<i64>,
    pub passengers: u32,
    pub departure_time: DateTime<Utc>,
    pub start_trail_date: DateTime<Utc>,
    pub end_trail_date: DateTime<Utc>,
    pub pickup_address: String,
    pub drop_off_address: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    /// Comma-separated; split and trimmed on submit.
    pub stop_stations: String,
    pub notes: String,
}

impl BookingForm {
    fn into_booking(self, user_id: i64) -> Booking {
        Booking {
            booking_id: random_id(),
            user_id,
            vehicle_id: self.vehicle_id,
            booking_type_id: self.booking_type_id,
            status: BookingStatus::Pending,
            departure_time: self.departure_time,
            start_trail_date: self.start_trail_date,
            end_trail_date: self.end_trail_date,
            passengers: self.passengers,
            pickup_address: self.pickup_address,
            drop_off_address: self.drop_off_address,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            stop_stations: self
                .stop_stations
                .split(',')
                .map(|station| station.trim().to_string())
                .filter(|station| !station.is_empty())
                .collect(),
            notes: self.notes,
        }
    }

    #[cfg(test)]
    pub(crate) fn sample() -> Self {
        let departure: DateTime<Utc> = "2026-08-10T08:00:00Z".parse().unwrap();
        Self {
            vehicle_id: 3,
            booking_type_id: Some(1),
            passengers: 25,
            departure_time: departure,
            start_trail_date: departure,
            end_trail_date: "2026-08-12T18:00:00Z".parse().unwrap(),
            pickup_address: "Central Station".to_string(),
            drop_off_address: "Dead Sea".to_string(),
            full_name: "Dana Levi".to_string(),
            email: "dana@example.com".to_string(),
            phone_number: "050-1234567".to_string(),
            stop_stations: "Jerusalem, Masada".to_string(),
            notes: String::new(),
        }
    }
}

/// Client-side numeric ID below one million, as the remote API expects.
fn random_id() -> i64 {
    rand::rng().random_range(0..1_000_000)
}

pub struct App {
    /// Configuration
    config: Config,
    /// Session manager
    session: SessionStore,
    /// Remote API client
    api: ApiClient,
}

impl App {
    /// Set up storage and the API client. Session recovery happens in
    /// [`App::initialize`].
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let store = Store::open(&config.database_path)?;
        let session = SessionStore::new(store);
        let api = ApiClient::new(config.api_base_url.clone())?;

        Ok(Self {
            config,
            session,
            api,
        })
    }

    /// Recover the persisted session, if any.
    pub fn initialize(&self) -> Option<SessionUser> {
        let restored = self.session.initialize();

        tracing::info!(
            restored = restored.is_some(),
            api = %self.config.api_base_url,
            "App initialized"
        );

        restored
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // === Auth flows ===

    /// Check credentials against the remote API and adopt the returned user
    /// record as the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionUser> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let response = self.api.login(username, password).await?;
        let user = response.user;
        self.session.login(user.clone())?;

        Ok(user)
    }

    pub fn logout(&self) -> Result<()> {
        self.session.logout()?;
        Ok(())
    }

    pub async fn sign_up(&self, request: &SignUpRequest, confirm_password: &str) -> Result<()> {
        validate::validate_signup(request, confirm_password)?;
        self.api.sign_up(request).await?;
        Ok(())
    }

    /// Current user, or a typed refusal for flows that need a login.
    pub fn require_login(&self) -> Result<SessionUser> {
        self.session.current().ok_or(CoreError::NotLoggedIn)
    }

    /// Current user if they are an administrator.
    pub fn require_admin(&self) -> Result<SessionUser> {
        let user = self.require_login()?;
        if !user.is_admin() {
            return Err(CoreError::AdminRequired);
        }
        Ok(user)
    }

    // === Profile ===

    /// Fetch the logged-in user's full record from the API.
    pub async fn profile(&self) -> Result<User> {
        let user = self.require_login()?;
        let user_id = user.user_id.ok_or(CoreError::NotLoggedIn)?;
        Ok(self.api.user_by_id(user_id).await?)
    }

    pub async fn report_bug(&self, message: &str) -> Result<BugReport> {
        let user = self.require_login()?;
        let user_id = user.user_id.ok_or(CoreError::NotLoggedIn)?;

        if message.trim().is_empty() {
            return Err(CoreError::Validation(
                "A bug report needs a message".to_string(),
            ));
        }

        let report = BugReport {
            report_id: random_id(),
            user_id,
            message: message.to_string(),
            timestamp: Utc::now(),
            status: "Pending".to_string(),
        };

        self.api.create_report(&report).await?;

        tracing::info!(report_id = report.report_id, "Submitted bug report");

        Ok(report)
    }

    // === Booking ===

    /// Validate and submit a booking request for the logged-in user.
    pub async fn book(&self, form: BookingForm) -> Result<Booking> {
        let user = self.require_login()?;
        let user_id = user.user_id.ok_or(CoreError::NotLoggedIn)?;

        validate::validate_booking(&form)?;

        let booking = form.into_booking(user_id);
        self.api.create_booking(&booking).await?;

        tracing::info!(
            booking_id = booking.booking_id,
            vehicle_id = booking.vehicle_id,
            "Created booking"
        );

        Ok(booking)
    }

    /// Vehicles and booking types offered on the booking form.
    pub async fn booking_options(&self) -> Result<(Vec<Vehicle>, Vec<BookingType>)> {
        let vehicles = self.api.all_vehicles().await?;
        let types = self.api.all_booking_types().await?;
        Ok((vehicles, types))
    }

    // === Trip browsing ===

    pub async fn all_trips(&self) -> Result<Vec<Trip>> {
        Ok(self.api.all_trips().await?)
    }

    /// Fetch all trips and filter by name substring, as the search screen
    /// does.
    pub async fn search_trips(&self, name_query: &str) -> Result<Vec<Trip>> {
        let trips = self.api.all_trips().await?;
        Ok(search::filter_trips_by_name(trips, name_query))
    }

    /// Fetch all trips and filter by category substring.
    pub async fn trips_by_type(&self, type_query: &str) -> Result<Vec<Trip>> {
        let trips = self.api.all_trips().await?;
        Ok(search::filter_trips_by_type(trips, type_query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_splits_stop_stations() {
        let mut form = BookingForm::sample();
        form.stop_stations = "Jerusalem, Masada , ,Ein Gedi".to_string();

        let booking = form.into_booking(42);
        assert_eq!(booking.user_id, 42);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.stop_stations, vec!["Jerusalem", "Masada", "Ein Gedi"]);
        assert!(booking.booking_id < 1_000_000);
    }
}
