//! Session user record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated user as returned by the login endpoint.
///
/// Only `userID` and `userType` carry meaning on the client; the remaining
/// profile fields are kept verbatim so the stored record round-trips the
/// server's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "userType", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Remaining profile fields from the server, carried as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn new(user_id: i64, user_type: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            user_type: Some(user_type.into()),
            full_name: None,
            username: None,
            email: None,
            extra: Map::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_type.as_deref() == Some("admin")
    }

    pub fn is_client(&self) -> bool {
        self.user_type.as_deref() == Some("client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "userID": 42,
            "userType": "client",
            "fullName": "Dana Levi",
            "username": "dana",
            "email": "dana@example.com",
            "city": "Haifa"
        }"#;

        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, Some(42));
        assert_eq!(user.user_type.as_deref(), Some("client"));
        assert_eq!(user.full_name.as_deref(), Some("Dana Levi"));
        assert_eq!(user.extra.get("city"), Some(&Value::from("Haifa")));

        // Unknown fields survive a round-trip
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["userID"], 42);
        assert_eq!(back["city"], "Haifa");
    }

    #[test]
    fn test_user_without_id() {
        let user: SessionUser = serde_json::from_str(r#"{"username":"ghost"}"#).unwrap();
        assert_eq!(user.user_id, None);
    }

    #[test]
    fn test_user_type_checks() {
        assert!(SessionUser::new(1, "admin").is_admin());
        assert!(SessionUser::new(2, "client").is_client());
        assert!(!SessionUser::new(3, "client").is_admin());
    }
}
