//! Request cursor
//!
//! The `from_date` value sent to the review API. It is fixed for the lifetime
//! of the process: every poll asks for the same window.

use chrono::{DateTime, Utc};

/// Length of the lookback window, in seconds (one average month)
pub const LOOKBACK_SECS: i64 = 2_629_743;

/// Unix timestamp bounding which submissions the API considers recent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(i64);

impl Cursor {
    /// Creates a cursor from a raw unix timestamp
    pub fn from_unix(secs: i64) -> Self {
        Self(secs)
    }

    /// Cursor one lookback window before `now`
    pub fn month_before(now: DateTime<Utc>) -> Self {
        Self(now.timestamp() - LOOKBACK_SECS)
    }

    /// Cursor one lookback window before the current time
    pub fn month_ago() -> Self {
        Self::month_before(Utc::now())
    }

    /// Seconds since the unix epoch
    pub fn as_unix(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_before() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let cursor = Cursor::month_before(now);
        assert_eq!(cursor.as_unix(), 1_700_000_000 - 2_629_743);
    }

    #[test]
    fn test_month_ago_is_in_the_past() {
        let cursor = Cursor::month_ago();
        assert!(cursor.as_unix() < Utc::now().timestamp());
    }

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(Cursor::from_unix(42).to_string(), "42");
    }
}
