use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

use crate::entry::EntryDraft;
use crate::ids::EntryId;

/// A persisted journal entry.
/// 已持久化的日记条目。
///
/// `id` and `created_at` are fixed at creation; `updated_at` is never
/// earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a brand-new entry from a validated draft.
    ///
    /// Assigns a fresh id and stamps both timestamps with `now`, truncated to
    /// the millisecond precision used by the canonical timestamp text.
    pub fn create(draft: EntryDraft, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(3);
        Self {
            id: EntryId::new(),
            date: draft.date,
            title: draft.title,
            body: draft.body,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild an entry from stored values.
    pub fn restore(
        id: EntryId,
        date: NaiveDate,
        title: String,
        body: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            date,
            title,
            body,
            created_at,
            updated_at,
        }
    }
}
