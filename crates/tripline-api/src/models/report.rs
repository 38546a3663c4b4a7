//! Bug report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-filed bug report. `ReportID` is generated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugReport {
    #[serde(rename = "ReportID")]
    pub report_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Status")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_wire_names() {
        let report = BugReport {
            report_id: 123,
            user_id: 42,
            message: "Search crashes".to_string(),
            timestamp: "2026-08-04T12:00:00Z".parse().unwrap(),
            status: "Pending".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ReportID"], 123);
        assert_eq!(json["Message"], "Search crashes");
        assert_eq!(json["Status"], "Pending");
    }
}
