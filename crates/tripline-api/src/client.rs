//! Request plumbing shared by all endpoints

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::Result;

/// Stateless HTTP client for the booking service.
///
/// Holds only the connection pool and the base URL; per-resource methods
/// live in sibling modules.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error payload the server attaches to non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<StatusCode> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        Ok(Self::check(response).await?.status())
    }

    pub(crate) async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.http.put(&url).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.http.delete(&url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Map non-success statuses to a typed error carrying the server's
    /// `message` field when the body has one.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message.unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };

        tracing::warn!(status = status.as_u16(), %message, "Request failed");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_cleanly() {
        let client = ApiClient::new("https://example.com/api/").unwrap();
        assert_eq!(client.url("/trips/GetAllTrips"), "https://example.com/api/trips/GetAllTrips");
        assert_eq!(client.url("bookings"), "https://example.com/api/bookings");
    }
}
