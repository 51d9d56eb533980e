//! Date and time formatting helpers used by the list and detail views.

use chrono::{DateTime, NaiveDate};

/// Format an RFC 3339 timestamp as "DD.MM.YYYY HH:MM".
/// Unparseable input is shown as-is.
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Format a date (or the date part of a timestamp) as "DD.MM.YYYY".
pub fn format_date(date_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return dt.format("%d.%m.%Y").to_string();
    }
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2025-03-15T14:02:26.123Z"),
            "15.03.2025 14:02"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15.03.2025");
        assert_eq!(format_date("2025-03-15T14:02:26Z"), "15.03.2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
