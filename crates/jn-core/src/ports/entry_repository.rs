use anyhow::Result;

use crate::entry::Entry;
use crate::ids::EntryId;
use crate::query::{EntryPage, ListEntriesCriteria};

/// Storage contract for journal entries.
/// 日记条目的存储契约。
///
/// ## `query` contract
///
/// Given validated criteria, implementations must:
/// - keep rows matching `date` AND `date_from..=date_to` AND `query`
///   (case-insensitive substring on title or body);
/// - order by `sort_field`/`sort_dir`, then by id ascending so pages stay
///   stable when primary values repeat;
/// - skip `criteria.offset()` rows and return at most `per_page`;
/// - report `total` as the filtered count ignoring pagination.
///
/// Errors are infrastructure failures. Callers do not retry; timeouts and
/// retries, if any, belong to the implementation.
#[async_trait::async_trait]
pub trait EntryRepositoryPort: Send + Sync {
    async fn query(&self, criteria: &ListEntriesCriteria) -> Result<EntryPage>;

    /// Filtered count, same value as `query(..).total`.
    async fn count(&self, criteria: &ListEntriesCriteria) -> Result<u64>;

    async fn insert(&self, entry: &Entry) -> Result<()>;

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>>;

    /// Returns `false` when no entry had that id.
    async fn delete_by_id(&self, id: &EntryId) -> Result<bool>;
}
