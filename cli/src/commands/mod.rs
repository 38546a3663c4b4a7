//! Command implementations, one module per flow

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod profile;
pub mod trips;

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};

/// Accept either a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date
/// (interpreted as midnight UTC).
pub(crate) fn parse_date(input: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(ts) = input.parse::<DateTime<Utc>>() {
        return Ok(ts);
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {input} (expected YYYY-MM-DD or RFC 3339)"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid date: {input}"))?;

    Ok(DateTime::from_naive_utc_and_offset(midnight, Utc))
}

/// Deletes are destructive; insist on an explicit `--yes`.
pub(crate) fn confirm_delete(what: &str, yes: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("Refusing to delete {what} without --yes");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_both_shapes() {
        let day = parse_date("2026-08-10").unwrap();
        assert_eq!(day.to_rfc3339(), "2026-08-10T00:00:00+00:00");

        let ts = parse_date("2026-08-10T08:30:00Z").unwrap();
        assert_eq!(ts.timestamp(), day.timestamp() + 8 * 3600 + 1800);

        assert!(parse_date("10/08/2026").is_err());
    }
}
