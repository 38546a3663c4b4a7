//! Bug report endpoints

use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::models::BugReport;
use crate::Result;

impl ApiClient {
    /// `POST /reports/create/` — trailing slash matches the remote route.
    pub async fn create_report(&self, report: &BugReport) -> Result<StatusCode> {
        self.post_unit("reports/create/", report).await
    }
}
