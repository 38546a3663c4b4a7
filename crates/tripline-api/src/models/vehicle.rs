//! Vehicle model

use serde::{Deserialize, Serialize};

/// A vehicle in the fleet.
///
/// The remote API is inconsistent about casing (`Make` in the admin
/// endpoints, `make` in booking-screen responses); the aliases accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "VehicleID")]
    pub vehicle_id: i64,
    #[serde(rename = "Make", alias = "make")]
    pub make: String,
    #[serde(rename = "Model", alias = "model")]
    pub model: String,
    #[serde(rename = "Year", alias = "year")]
    pub year: i32,
    #[serde(rename = "Km", alias = "km")]
    pub km: i64,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    #[serde(rename = "carPlateNumber")]
    pub car_plate_number: String,
}

impl Vehicle {
    /// Display label, e.g. `"Mercedes Tourismo"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// Payload for creating or updating a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVehicle {
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Km")]
    pub km: i64,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    #[serde(rename = "carPlateNumber")]
    pub car_plate_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_casings() {
        let admin = r#"{"VehicleID":1,"Make":"Mercedes","Model":"Tourismo","Year":2020,"Km":120000,"vehicleType":"Coach","carPlateNumber":"12-345-67"}"#;
        let booking = r#"{"VehicleID":1,"make":"Mercedes","model":"Tourismo","year":2020,"km":120000,"vehicleType":"Coach","carPlateNumber":"12-345-67"}"#;

        let a: Vehicle = serde_json::from_str(admin).unwrap();
        let b: Vehicle = serde_json::from_str(booking).unwrap();
        assert_eq!(a.label(), "Mercedes Tourismo");
        assert_eq!(a.label(), b.label());
    }
}
