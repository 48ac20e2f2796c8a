//! Raw transport input: recognized keys and lookup helpers.
//!
//! Raw input is an untyped JSON value. Lookups treat a missing key and an
//! explicit `null` the same way: the field is absent.

use serde_json::Value;

/// Keys recognized in raw request payloads.
pub mod keys {
    pub const ID: &str = "id";
    pub const PAGE: &str = "page";
    pub const PER_PAGE: &str = "perPage";
    pub const SORT_FIELD: &str = "sortField";
    pub const SORT_DIR: &str = "sortDir";
    pub const DATE: &str = "date";
    pub const DATE_FROM: &str = "dateFrom";
    pub const DATE_TO: &str = "dateTo";
    pub const QUERY: &str = "query";
    pub const TITLE: &str = "title";
    pub const BODY: &str = "body";
}

/// Look up a present, non-null field.
pub fn field<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.as_object()
        .and_then(|object| object.get(key))
        .filter(|value| !value.is_null())
}

/// Trimmed string value of a field, `None` when absent, not a string, or
/// blank after trimming.
pub fn trimmed_string(raw: &Value, key: &str) -> Option<String> {
    field(raw, key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Integer value of a field: a JSON integer, an integral float, or a string
/// holding an integer after trimming. Out-of-range integers saturate.
pub fn integer(raw: &Value, key: &str) -> Option<i64> {
    match field(raw, key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| {
                // `as` saturates at the i64 bounds.
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
        Value::String(s) => integer_text(s.trim()),
        _ => None,
    }
}

fn integer_text(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if text.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_counts_as_absent() {
        let raw = json!({ "page": null });
        assert!(field(&raw, keys::PAGE).is_none());
    }

    #[test]
    fn test_non_object_payload_has_no_fields() {
        let raw = json!([1, 2, 3]);
        assert!(field(&raw, keys::PAGE).is_none());
    }

    #[test]
    fn test_trimmed_string_drops_blanks() {
        let raw = json!({ "query": "   ", "date": " 2025-06-01 " });
        assert_eq!(trimmed_string(&raw, keys::QUERY), None);
        assert_eq!(
            trimmed_string(&raw, keys::DATE),
            Some("2025-06-01".to_string())
        );
    }

    #[test]
    fn test_integer_accepts_numbers_and_numeric_strings() {
        let raw = json!({ "a": 3, "b": " 7 ", "c": 2.0, "d": 2.5, "e": "abc", "f": true });
        assert_eq!(integer(&raw, "a"), Some(3));
        assert_eq!(integer(&raw, "b"), Some(7));
        assert_eq!(integer(&raw, "c"), Some(2));
        assert_eq!(integer(&raw, "d"), None);
        assert_eq!(integer(&raw, "e"), None);
        assert_eq!(integer(&raw, "f"), None);
    }

    #[test]
    fn test_integer_saturates_huge_unsigned_values() {
        let raw = json!({ "page": u64::MAX });
        assert_eq!(integer(&raw, keys::PAGE), Some(i64::MAX));
    }

    #[test]
    fn test_integer_saturates_oversized_strings_and_floats() {
        let raw = json!({
            "a": "100000000000000000000",
            "b": " -100000000000000000000 ",
            "c": 1e20,
            "d": -1e20,
            "e": "+12",
            "f": "1-2",
            "g": "-",
        });
        assert_eq!(integer(&raw, "a"), Some(i64::MAX));
        assert_eq!(integer(&raw, "b"), Some(i64::MIN));
        assert_eq!(integer(&raw, "c"), Some(i64::MAX));
        assert_eq!(integer(&raw, "d"), Some(i64::MIN));
        assert_eq!(integer(&raw, "e"), Some(12));
        assert_eq!(integer(&raw, "f"), None);
        assert_eq!(integer(&raw, "g"), None);
    }
}
