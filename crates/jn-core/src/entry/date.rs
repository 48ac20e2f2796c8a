//! Canonical text forms for calendar dates and timestamps.
//! 日期与时间戳的规范文本格式。

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Canonical calendar date format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date in the canonical `YYYY-MM-DD` form.
///
/// Stricter than `NaiveDate::parse_from_str`: unpadded months/days and
/// surrounding text are rejected, so `2025-6-1` is not a valid date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Fixed-width RFC 3339 form with millisecond precision and an explicit
/// `+00:00` offset. Lexical order equals chronological order.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, false)
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_calendar_date_accepts_canonical_form() {
        let date = parse_calendar_date("2025-06-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
    }

    #[test]
    fn test_parse_calendar_date_rejects_loose_forms() {
        assert!(parse_calendar_date("2025-6-5").is_none());
        assert!(parse_calendar_date("05/06/2025").is_none());
        assert!(parse_calendar_date("2025-06-05T00:00:00").is_none());
        assert!(parse_calendar_date("2025-02-30").is_none());
        assert!(parse_calendar_date("").is_none());
        assert!(parse_calendar_date("２０２５-06-05").is_none());
    }

    #[test]
    fn test_format_timestamp_has_explicit_utc_offset() {
        let at = Utc.with_ymd_and_hms(2025, 6, 5, 10, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2025-06-05T10:30:00.000+00:00");
    }

    #[test]
    fn test_timestamp_text_round_trips() {
        let at = Utc.with_ymd_and_hms(2025, 6, 5, 10, 30, 0).unwrap();
        assert_eq!(parse_timestamp(&format_timestamp(at)), Some(at));
    }
}
