//! Timestamp formatting shared by report items, stored records and reports.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current UTC time as an ISO-8601 string with microsecond precision.
pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
