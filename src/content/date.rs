//! Timestamp coercion for CMS date strings

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};

/// A date parsed from a CMS string
///
/// Parsing never fails outright: an unreadable string is kept as
/// `Invalid` and serializes to `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Valid(DateTime<Utc>),
    Invalid(String),
}

impl Timestamp {
    /// Parse a timestamp string
    pub fn parse(s: &str) -> Self {
        match parse_date_string(s) {
            Some(dt) => Timestamp::Valid(dt),
            None => {
                tracing::debug!("Unparseable date {:?}", s);
                Timestamp::Invalid(s.to_string())
            }
        }
    }

    /// The parsed date, if valid
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Timestamp::Valid(dt) => Some(dt),
            Timestamp::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Timestamp::Valid(_))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::Valid(dt) => {
                serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
            }
            Timestamp::Invalid(_) => serializer.serialize_none(),
        }
    }
}

/// Parse a date string in various formats, as UTC
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    // Try RFC 3339 / ISO 8601 first; this is what the API sends
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
