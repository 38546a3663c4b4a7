//! User and auth endpoints

use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::models::{LoginRequest, LoginResponse, SignUpRequest, User};
use crate::Result;

impl ApiClient {
    /// `POST /users/Login` — credential check; the returned user record
    /// becomes the session on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("users/Login", &request).await
    }

    /// `POST /users/SignUp` — self-service client registration.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<StatusCode> {
        self.post_unit("users/SignUp", request).await
    }

    /// `GET /users/GetUserByID/{id}`
    pub async fn user_by_id(&self, user_id: i64) -> Result<User> {
        self.get_json(&format!("users/GetUserByID/{user_id}")).await
    }

    /// `GET /users/GetAllUsers`
    pub async fn all_users(&self) -> Result<Vec<User>> {
        self.get_json("users/GetAllUsers").await
    }

    /// `PUT /users/EditUser/{id}`
    pub async fn edit_user(&self, user_id: i64, user: &User) -> Result<()> {
        self.put_unit(&format!("users/EditUser/{user_id}"), user).await
    }

    /// `DELETE /users/DeleteUser/{id}`
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        self.delete_unit(&format!("users/DeleteUser/{user_id}")).await
    }
}
