//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// True once more than `age` has passed since this timestamp.
    pub fn is_older_than(&self, age: std::time::Duration) -> bool {
        match chrono::Duration::from_std(age) {
            Ok(age) => Utc::now() - self.0 > age,
            Err(_) => false,
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_serializes_as_rfc3339() {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let ts = Timestamp::from_datetime(dt);

        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_datetime().year(), 2024);
    }

    #[test]
    fn timestamp_ordering_works() {
        let early = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        let late = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2024-01-15T10:31:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );

        assert!(early.is_before(&late));
        assert!(!late.is_before(&early));
    }

    #[test]
    fn is_older_than_compares_against_now() {
        let hour_ago = Timestamp::from_datetime(Utc::now() - chrono::Duration::hours(1));

        assert!(hour_ago.is_older_than(std::time::Duration::from_secs(60)));
        assert!(!hour_ago.is_older_than(std::time::Duration::from_secs(7200)));
        assert!(!Timestamp::now().is_older_than(std::time::Duration::from_secs(60)));
    }
}
