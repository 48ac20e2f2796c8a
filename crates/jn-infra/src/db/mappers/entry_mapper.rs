use anyhow::Result;
use jn_core::entry::{format_calendar_date, format_timestamp, parse_calendar_date, parse_timestamp};
use jn_core::{Entry, EntryId};

use crate::db::error::RowDecodeError;
use crate::db::models::{EntryRow, NewEntryRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct EntryRowMapper;

impl InsertMapper<Entry, NewEntryRow> for EntryRowMapper {
    fn to_row(&self, domain: &Entry) -> Result<NewEntryRow> {
        Ok(NewEntryRow {
            id: domain.id.to_string(),
            entry_date: format_calendar_date(domain.date),
            title: domain.title.clone(),
            body: domain.body.clone(),
            created_at: format_timestamp(domain.created_at),
            updated_at: format_timestamp(domain.updated_at),
        })
    }
}

impl RowMapper<EntryRow, Entry> for EntryRowMapper {
    fn to_domain(&self, row: &EntryRow) -> Result<Entry> {
        let date = parse_calendar_date(&row.entry_date).ok_or_else(|| RowDecodeError::InvalidDate {
            id: row.id.clone(),
            value: row.entry_date.clone(),
        })?;
        let timestamp = |column: &'static str, value: &str| {
            parse_timestamp(value).ok_or_else(|| RowDecodeError::InvalidTimestamp {
                id: row.id.clone(),
                column,
                value: value.to_string(),
            })
        };

        Ok(Entry::restore(
            EntryId::from(row.id.as_str()),
            date,
            row.title.clone(),
            row.body.clone(),
            timestamp("created_at", &row.created_at)?,
            timestamp("updated_at", &row.updated_at)?,
        ))
    }
}
