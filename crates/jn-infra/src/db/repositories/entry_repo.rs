use crate::db::models::{EntryRow, NewEntryRow};
use crate::db::ports::DbExecutor;
use crate::db::ports::{InsertMapper, RowMapper};
use crate::db::schema::entries;
use anyhow::{Context, Result};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use jn_core::entry::format_calendar_date;
use jn_core::ports::EntryRepositoryPort;
use jn_core::{Entry, EntryId, EntryPage, ListEntriesCriteria, SortDirection, SortField};
use tracing::debug;

const LIKE_ESCAPE: char = '\\';

pub struct DieselEntryRepository<E, IM, RM> {
    executor: E,
    insert_mapper: IM,
    row_mapper: RM,
}

impl<E, IM, RM> DieselEntryRepository<E, IM, RM> {
    pub fn new(executor: E, insert_mapper: IM, row_mapper: RM) -> Self {
        Self {
            executor,
            insert_mapper,
            row_mapper,
        }
    }
}

/// `%query%` with LIKE wildcards in the user text escaped.
fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Rows matching every filter in `criteria`, unordered and unpaged.
fn filtered(criteria: &ListEntriesCriteria) -> entries::BoxedQuery<'static, Sqlite> {
    let mut query = entries::table.into_boxed();

    if let Some(date) = criteria.date() {
        query = query.filter(entries::entry_date.eq(format_calendar_date(date)));
    }
    if let Some(from) = criteria.date_from() {
        query = query.filter(entries::entry_date.ge(format_calendar_date(from)));
    }
    if let Some(to) = criteria.date_to() {
        query = query.filter(entries::entry_date.le(format_calendar_date(to)));
    }
    if let Some(text) = criteria.query() {
        let pattern = contains_pattern(text);
        query = query.filter(
            entries::title
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(entries::body.like(pattern).escape(LIKE_ESCAPE)),
        );
    }

    query
}

fn ordered(
    query: entries::BoxedQuery<'static, Sqlite>,
    criteria: &ListEntriesCriteria,
) -> entries::BoxedQuery<'static, Sqlite> {
    let query = match (criteria.sort_field(), criteria.sort_dir()) {
        (SortField::Date, SortDirection::Asc) => query.order(entries::entry_date.asc()),
        (SortField::Date, SortDirection::Desc) => query.order(entries::entry_date.desc()),
        (SortField::CreatedAt, SortDirection::Asc) => query.order(entries::created_at.asc()),
        (SortField::CreatedAt, SortDirection::Desc) => query.order(entries::created_at.desc()),
        (SortField::UpdatedAt, SortDirection::Asc) => query.order(entries::updated_at.asc()),
        (SortField::UpdatedAt, SortDirection::Desc) => query.order(entries::updated_at.desc()),
        (SortField::Title, SortDirection::Asc) => query.order(entries::title.asc()),
        (SortField::Title, SortDirection::Desc) => query.order(entries::title.desc()),
    };
    // Stable pages when primary values repeat.
    query.then_order_by(entries::id.asc())
}

fn count_filtered(conn: &mut SqliteConnection, criteria: &ListEntriesCriteria) -> Result<u64> {
    let total: i64 = filtered(criteria).count().get_result(conn)?;
    Ok(u64::try_from(total).unwrap_or_default())
}

#[async_trait::async_trait]
impl<E, IM, RM> EntryRepositoryPort for DieselEntryRepository<E, IM, RM>
where
    E: DbExecutor,
    IM: InsertMapper<Entry, NewEntryRow>,
    RM: RowMapper<EntryRow, Entry>,
{
    async fn query(&self, criteria: &ListEntriesCriteria) -> Result<EntryPage> {
        let limit = i64::from(criteria.per_page());
        // Pages past the end of any table still count, they just return no rows.
        let offset = i64::try_from(criteria.offset()).unwrap_or(i64::MAX);

        self.executor.run(|conn| {
            let (total, rows) = conn.transaction::<_, anyhow::Error, _>(|conn| {
                let total = count_filtered(conn, criteria)?;
                let rows = ordered(filtered(criteria), criteria)
                    .limit(limit)
                    .offset(offset)
                    .load::<EntryRow>(conn)?;
                Ok((total, rows))
            })?;

            debug!(total, returned = rows.len(), offset, "Queried entries");

            let rows = rows
                .iter()
                .map(|row| self.row_mapper.to_domain(row))
                .collect::<Result<Vec<_>>>()?;
            Ok(EntryPage { rows, total })
        })
    }

    async fn count(&self, criteria: &ListEntriesCriteria) -> Result<u64> {
        self.executor.run(|conn| count_filtered(conn, criteria))
    }

    async fn insert(&self, entry: &Entry) -> Result<()> {
        let row = self.insert_mapper.to_row(entry)?;
        self.executor.run(|conn| {
            diesel::insert_into(entries::table)
                .values(&row)
                .execute(conn)
                .with_context(|| format!("Failed to insert entry {}", row.id))?;
            Ok(())
        })
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>> {
        self.executor.run(|conn| {
            let row = entries::table
                .filter(entries::id.eq(id.as_str()))
                .first::<EntryRow>(conn)
                .optional()?;

            match row {
                Some(row) => Ok(Some(self.row_mapper.to_domain(&row)?)),
                None => Ok(None),
            }
        })
    }

    async fn delete_by_id(&self, id: &EntryId) -> Result<bool> {
        self.executor.run(|conn| {
            let deleted = diesel::delete(entries::table.filter(entries::id.eq(id.as_str())))
                .execute(conn)?;
            Ok(deleted > 0)
        })
    }
}
