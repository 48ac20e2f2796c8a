use chrono::NaiveDate;
use serde_json::Value;

use crate::input::{field, keys};

/// Add-entry input after normalization: strings trimmed, missing fields empty.
///
/// Normalization never fails; `DomainValidator::check_entry_input` decides
/// whether the values are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntryInput {
    pub date: String,
    pub title: String,
    pub body: String,
}

impl NormalizedEntryInput {
    pub fn from_raw(raw: &Value) -> Self {
        let text = |key: &str| {
            field(raw, key)
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };
        Self {
            date: text(keys::DATE),
            title: text(keys::TITLE),
            body: text(keys::BODY),
        }
    }
}

/// Validated content of an entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub title: String,
    pub body: String,
}
