use jn_core::entry::{format_calendar_date, format_timestamp};
use jn_core::Entry;
use serde::{Deserialize, Serialize};

/// Public, Entry-shaped payload.
/// 对外暴露的条目结构。
///
/// Fields are copied from the domain entry in their canonical text forms;
/// nothing is reformatted or derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub id: String,
    pub date: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Entry> for EntryView {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            date: format_calendar_date(entry.date),
            title: entry.title.clone(),
            body: entry.body.clone(),
            created_at: format_timestamp(entry.created_at),
            updated_at: format_timestamp(entry.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use jn_core::EntryId;

    #[test]
    fn test_view_passes_fields_through() {
        let created = Utc.with_ymd_and_hms(2025, 6, 5, 9, 15, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2025, 6, 6, 9, 15, 0).unwrap();
        let entry = Entry::restore(
            EntryId::from("6f1c2d3e-4b5a-4c6d-8e7f-0123456789ab"),
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            "  spaced title ".to_string(),
            "body".to_string(),
            created,
            updated,
        );

        let view = EntryView::from(&entry);

        assert_eq!(view.id, "6f1c2d3e-4b5a-4c6d-8e7f-0123456789ab");
        assert_eq!(view.date, "2025-06-05");
        assert_eq!(view.title, "  spaced title ");
        assert_eq!(view.created_at, "2025-06-05T09:15:00.000+00:00");
        assert_eq!(view.updated_at, "2025-06-06T09:15:00.000+00:00");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let at = Utc.with_ymd_and_hms(2025, 6, 5, 9, 15, 0).unwrap();
        let entry = Entry::restore(
            EntryId::from("id-1"),
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            "t".to_string(),
            "b".to_string(),
            at,
            at,
        );
        let json = serde_json::to_value(EntryView::from(&entry)).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
