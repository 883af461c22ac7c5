//! Reporting windows
//!
//! The fixed look-back used when no dates are given on the command line.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Days between now and the reference time of the default reports
pub const LAG_DAYS: i64 = 2;
/// Length of the default range report
pub const SPAN_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    /// Start of the range report
    pub last: DateTime<Utc>,
    /// Reference time for current-iteration reports and end of the range report
    pub current: DateTime<Utc>,
}

impl ReportWindow {
    /// `current = now - 2 days`, `last = current - 14 days`
    pub fn ending_before(now: DateTime<Utc>) -> Self {
        let current = now - Duration::days(LAG_DAYS);
        Self {
            last: current - Duration::days(SPAN_DAYS),
            current,
        }
    }
}

/// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| format!("expected YYYY-MM-DD or RFC 3339, got {:?}", raw))
}
