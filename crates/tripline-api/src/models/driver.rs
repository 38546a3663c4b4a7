//! Driver model

use serde::{Deserialize, Serialize};

/// A driver record: user profile fields plus license data.
///
/// The same shape is used for listing and for create/update payloads, as
/// the remote API expects the full form either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(rename = "drivingLicense")]
    pub driving_license: String,
    /// Expiration date as the server formats it.
    #[serde(rename = "drivingLicenseExpiration")]
    pub driving_license_expiration: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_driver() {
        let json = r#"{
            "userID": 12,
            "fullName": "Avi Cohen",
            "username": "avic",
            "email": "avi@example.com",
            "language": "he",
            "country": "Israel",
            "city": "Tel Aviv",
            "drivingLicense": "D123456",
            "drivingLicenseExpiration": "2027-03-01"
        }"#;

        let driver: Driver = serde_json::from_str(json).unwrap();
        assert_eq!(driver.user_id, Some(12));
        assert_eq!(driver.driving_license, "D123456");
    }
}
