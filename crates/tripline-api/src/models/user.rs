//! User model and auth payloads

use serde::{Deserialize, Serialize};
use tripline_session::SessionUser;

/// A user record as the admin endpoints return it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: i64,
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
    #[serde(rename = "userTypeID", skip_serializing_if = "Option::is_none")]
    pub user_type_id: Option<i64>,
    #[serde(rename = "userType", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `/users/Login`; the user record is adopted as the session.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: SessionUser,
}

/// Payload for `/users/SignUp`. Self-service signups are always clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub language: String,
    pub country: String,
    pub city: String,
    #[serde(rename = "userTypeID")]
    pub user_type_id: i64,
    #[serde(rename = "userType")]
    pub user_type: String,
}

impl SignUpRequest {
    /// Client-role signup, the only role the public form creates.
    #[allow(clippy::too_many_arguments)]
    pub fn client(
        full_name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        language: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            language: language.into(),
            country: country.into(),
            city: city.into(),
            user_type_id: 2,
            user_type: "Client".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_carries_session_user() {
        let json = r#"{
            "message": "Login successful",
            "user": {"userID": 9, "userType": "admin", "fullName": "Noa"}
        }"#;

        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.user_id, Some(9));
        assert!(resp.user.is_admin());
    }

    #[test]
    fn test_signup_defaults_to_client_role() {
        let req = SignUpRequest::client("Noa", "noa", "n@x.io", "pw", "he", "IL", "Haifa");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userTypeID"], 2);
        assert_eq!(json["userType"], "Client");
        assert_eq!(json["fullName"], "Noa");
    }
}
