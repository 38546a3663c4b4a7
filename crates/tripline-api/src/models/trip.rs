//! Trip model

use serde::{Deserialize, Serialize};

/// Weekday labels matching the per-day hour slots, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "TripID")]
    pub trip_id: i64,
    #[serde(rename = "TripName")]
    pub trip_name: String,
    #[serde(rename = "TripType")]
    pub trip_type: String,
    /// Opening hour per weekday, `"HH:MM"` or `"Closed"`.
    #[serde(rename = "OpenHour", default)]
    pub open_hour: Vec<String>,
    /// Closing hour per weekday, `"HH:MM"` or `"Closed"`.
    #[serde(rename = "CloseHour", default)]
    pub close_hour: Vec<String>,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Trip {
    /// Pair weekday labels with their open/close hours for display.
    /// Missing slots read as `"Closed"`.
    pub fn weekly_hours(&self) -> Vec<(&'static str, &str, &str)> {
        WEEKDAYS
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let open = self.open_hour.get(i).map(String::as_str).unwrap_or("Closed");
                let close = self.close_hour.get(i).map(String::as_str).unwrap_or("Closed");
                (*day, open, close)
            })
            .collect()
    }
}

/// Payload for creating or updating a trip; the server assigns `TripID`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrip {
    #[serde(rename = "TripName")]
    pub trip_name: String,
    #[serde(rename = "TripType")]
    pub trip_type: String,
    #[serde(rename = "OpenHour")]
    pub open_hour: Vec<String>,
    #[serde(rename = "CloseHour")]
    pub close_hour: Vec<String>,
    #[serde(rename = "Description")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_trip() {
        let json = r#"{
            "TripID": 3,
            "TripName": "Galilee Day Tour",
            "TripType": "Nature",
            "OpenHour": ["08:00", "08:00", "08:00", "08:00", "08:00", "Closed", "Closed"],
            "CloseHour": ["18:00", "18:00", "18:00", "18:00", "18:00", "Closed", "Closed"],
            "Description": "Full-day guided tour"
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.trip_id, 3);
        assert_eq!(trip.trip_type, "Nature");
        assert_eq!(trip.open_hour.len(), 7);
    }

    #[test]
    fn test_weekly_hours_pads_missing_slots() {
        let trip: Trip = serde_json::from_str(
            r#"{"TripID":1,"TripName":"T","TripType":"City","Description":"d"}"#,
        )
        .unwrap();

        let hours = trip.weekly_hours();
        assert_eq!(hours.len(), 7);
        assert_eq!(hours[0], ("Sun", "Closed", "Closed"));
        assert_eq!(hours[6].0, "Sat");
    }
}
