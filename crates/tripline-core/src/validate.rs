//! Form validation
//!
//! Each submit path validates before any request leaves the process; the
//! rules match what the remote service's forms require.

use tripline_api::models::{Driver, NewTrip, NewVehicle, SignUpRequest};

use crate::app::BookingForm;
use crate::error::CoreError;
use crate::Result;

fn require(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} is required")));
    }
    Ok(())
}

fn require_email(email: &str) -> Result<()> {
    require("Email", email)?;
    if !email.contains('@') {
        return Err(CoreError::Validation(format!("Invalid email: {email}")));
    }
    Ok(())
}

pub fn validate_signup(request: &SignUpRequest, confirm_password: &str) -> Result<()> {
    require("Full name", &request.full_name)?;
    require("Username", &request.username)?;
    require_email(&request.email)?;
    require("Password", &request.password)?;
    require("Language", &request.language)?;
    require("Country", &request.country)?;
    require("City", &request.city)?;

    if request.password != confirm_password {
        return Err(CoreError::Validation("Passwords do not match".to_string()));
    }

    Ok(())
}

pub fn validate_booking(form: &BookingForm) -> Result<()> {
    if form.passengers == 0 {
        return Err(CoreError::Validation(
            "At least one passenger is required".to_string(),
        ));
    }
    require("Pick up address", &form.pickup_address)?;
    require("Drop off address", &form.drop_off_address)?;
    require("Full name", &form.full_name)?;
    require_email(&form.email)?;
    require("Phone", &form.phone_number)?;
    Ok(())
}

pub fn validate_trip(trip: &NewTrip) -> Result<()> {
    require("Trip name", &trip.trip_name)?;
    require("Trip type", &trip.trip_type)?;
    require("Description", &trip.description)?;
    Ok(())
}

/// Blank weekday slots submit as `"Closed"`; always exactly seven entries.
pub fn normalize_hours(hours: &[String]) -> Vec<String> {
    (0..7)
        .map(|i| match hours.get(i) {
            Some(h) if !h.trim().is_empty() => h.trim().to_string(),
            _ => "Closed".to_string(),
        })
        .collect()
}

pub fn validate_vehicle(vehicle: &NewVehicle) -> Result<()> {
    require("Make", &vehicle.make)?;
    require("Model", &vehicle.model)?;
    require("Vehicle type", &vehicle.vehicle_type)?;
    require("Car plate number", &vehicle.car_plate_number)?;

    if vehicle.year <= 0 {
        return Err(CoreError::Validation("Year must be positive".to_string()));
    }
    if vehicle.km < 0 {
        return Err(CoreError::Validation("Km cannot be negative".to_string()));
    }

    Ok(())
}

pub fn validate_driver(driver: &Driver) -> Result<()> {
    require("Full name", &driver.full_name)?;
    require("Username", &driver.username)?;
    require_email(&driver.email)?;
    require("Password", driver.password.as_deref().unwrap_or(""))?;
    require("Language", &driver.language)?;
    require("Country", &driver.country)?;
    require("City", &driver.city)?;
    require("Driving license", &driver.driving_license)?;
    require(
        "Driving license expiration",
        &driver.driving_license_expiration,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignUpRequest {
        SignUpRequest::client("Noa", "noa", "n@x.io", "pw", "he", "IL", "Haifa")
    }

    #[test]
    fn test_signup_complete_form_passes() {
        assert!(validate_signup(&signup(), "pw").is_ok());
    }

    #[test]
    fn test_signup_names_the_missing_field() {
        let mut request = signup();
        request.city = String::new();

        let err = validate_signup(&request, "pw").unwrap_err();
        assert!(err.to_string().contains("City"));
    }

    #[test]
    fn test_signup_password_mismatch() {
        let err = validate_signup(&signup(), "other").unwrap_err();
        assert!(err.to_string().contains("Passwords do not match"));
    }

    #[test]
    fn test_booking_requires_passengers() {
        let mut form = BookingForm::sample();
        form.passengers = 0;
        assert!(validate_booking(&form).is_err());

        form.passengers = 12;
        assert!(validate_booking(&form).is_ok());
    }

    #[test]
    fn test_booking_rejects_bad_email() {
        let mut form = BookingForm::sample();
        form.email = "not-an-email".to_string();
        assert!(validate_booking(&form).is_err());
    }

    #[test]
    fn test_normalize_hours_fills_blanks() {
        let hours = vec!["08:00".to_string(), String::new(), " ".to_string()];
        let normalized = normalize_hours(&hours);

        assert_eq!(normalized.len(), 7);
        assert_eq!(normalized[0], "08:00");
        assert_eq!(normalized[1], "Closed");
        assert_eq!(normalized[2], "Closed");
        assert_eq!(normalized[6], "Closed");
    }

    #[test]
    fn test_vehicle_year_must_be_positive() {
        let mut vehicle = NewVehicle {
            make: "Mercedes".to_string(),
            model: "Tourismo".to_string(),
            year: 0,
            km: 1000,
            vehicle_type: "Coach".to_string(),
            car_plate_number: "12-345-67".to_string(),
        };
        assert!(validate_vehicle(&vehicle).is_err());

        vehicle.year = 2020;
        assert!(validate_vehicle(&vehicle).is_ok());
    }
}
