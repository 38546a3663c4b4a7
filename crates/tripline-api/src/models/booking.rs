//! Booking models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a booking request, as the admin screen color-codes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(BookingStatus::Pending),
            "Confirmed" => Ok(BookingStatus::Confirmed),
            "Completed" => Ok(BookingStatus::Completed),
            "Cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("Unknown booking status: {other}")),
        }
    }
}

/// A booking request, both as submitted and as listed for admins.
///
/// `BookingID` is generated client-side; the remote service stores whatever
/// the client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "BookingID")]
    pub booking_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "VehicleID")]
    pub vehicle_id: i64,
    #[serde(rename = "bookingTypeID", skip_serializing_if = "Option::is_none")]
    pub booking_type_id: Option<i64>,
    pub status: BookingStatus,
    #[serde(rename = "DepartureTime")]
    pub departure_time: DateTime<Utc>,
    #[serde(rename = "startTrailDate")]
    pub start_trail_date: DateTime<Utc>,
    #[serde(rename = "endTrailDate")]
    pub end_trail_date: DateTime<Utc>,
    #[serde(rename = "Passengers")]
    pub passengers: u32,
    #[serde(rename = "PickupAddress")]
    pub pickup_address: String,
    #[serde(rename = "DropOffAddress")]
    pub drop_off_address: String,
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "stopStations", default)]
    pub stop_stations: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// A bookable service category (airport transfer, day tour, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingType {
    #[serde(rename = "BookingTypeID")]
    pub booking_type_id: i64,
    #[serde(rename = "TypeName")]
    pub type_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["Pending", "Confirmed", "Completed", "Cancelled"] {
            let status: BookingStatus = s.parse().unwrap();
            assert_eq!(status.as_str(), s);
            assert_eq!(serde_json::to_value(status).unwrap(), s);
        }
        assert!("Unknown".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_deserialize_wire_booking() {
        let json = r#"{
            "BookingID": 417233,
            "UserID": 42,
            "VehicleID": 3,
            "status": "Pending",
            "DepartureTime": "2026-08-10T08:00:00.000Z",
            "startTrailDate": "2026-08-10T08:00:00.000Z",
            "endTrailDate": "2026-08-12T18:00:00.000Z",
            "Passengers": 25,
            "PickupAddress": "Central Station",
            "DropOffAddress": "Dead Sea",
            "FullName": "Dana Levi",
            "Email": "dana@example.com",
            "PhoneNumber": "050-1234567",
            "stopStations": ["Jerusalem", "Masada"],
            "notes": "Two wheelchairs"
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.booking_id, 417233);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.stop_stations.len(), 2);
        assert_eq!(booking.booking_type_id, None);
    }
}
