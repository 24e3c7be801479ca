//! Timestamp display formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::DateTime;

/// Render an ISO 8601 creation timestamp as e.g. `02 Jan 2026, 5:04 pm`.
///
/// Unparseable input is shown as-is rather than hiding the record.
pub fn format_date_time(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%d %b %Y, %-I:%M %P").to_string())
        .unwrap_or_else(|_| iso.to_owned())
}
