//! ISO-8601 date parsing for form input.

use chrono::{DateTime, NaiveDate};

/// Parses an ISO-8601 calendar date.
///
/// Accepts `YYYY-MM-DD` (what `<input type="date">` submits) and full
/// RFC 3339 timestamps, which are truncated to their date part.
/// Returns `None` when the input is neither.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Formats a date for an `<input type="date">` value.
pub fn format_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_iso_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(
            parse_iso_date("2024-05-01T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_iso_date("2023-02-29"), None);
        assert_eq!(parse_iso_date("yesterday"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_format_input_date() {
        assert_eq!(
            format_input_date(NaiveDate::from_ymd_opt(2024, 1, 5)),
            "2024-01-05"
        );
        assert_eq!(format_input_date(None), "");
    }
}
