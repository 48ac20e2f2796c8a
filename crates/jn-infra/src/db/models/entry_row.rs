use diesel::prelude::*;

use crate::db::schema::entries;

/// Stored entry. Dates are `YYYY-MM-DD`, timestamps fixed-width RFC 3339
/// with milliseconds, so text order matches chronological order.
#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = entries)]
pub struct EntryRow {
    pub id: String,
    pub entry_date: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = entries)]
pub struct NewEntryRow {
    pub id: String,
    pub entry_date: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}
