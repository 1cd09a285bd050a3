use chrono::{DateTime, Datelike};

/// Format an ISO-8601 timestamp as zero-padded `DD.MM.YYYY`.
///
/// Unparseable input is echoed back as-is instead of failing. The table cell
/// then shows the raw value, which is visibly wrong but never a crash.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => format!("{:02}.{:02}.{}", date.day(), date.month(), date.year()),
        Err(_) => raw.to_string(),
    }
}
