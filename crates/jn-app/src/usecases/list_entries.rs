//! Use case for listing journal entries with filters, sorting and pagination
//! 列出日记条目的用例（过滤、排序、分页）

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use jn_core::ports::EntryRepositoryPort;
use jn_core::query::pages_count;
use jn_core::{
    CriteriaBuilder, DomainValidationError, DomainValidator, InputNormalizer,
    TransportValidationError, TransportValidator,
};

use crate::models::{EntryView, ListEntriesResult};

/// Error type for the list entries use case
#[derive(Debug, thiserror::Error)]
pub enum ListEntriesError {
    /// Malformed payload; carries the first violation only.
    #[error(transparent)]
    Transport(#[from] TransportValidationError),

    /// Business rules broken; carries every violation.
    #[error(transparent)]
    Domain(#[from] DomainValidationError),

    /// Storage failed; propagated as-is, never retried.
    #[error("storage failure: {0:#}")]
    Storage(anyhow::Error),
}

/// Use case for listing journal entries.
///
/// ## Behavior / 行为
/// 1. Normalize the raw payload
/// 2. Transport-validate the raw payload (fail-fast)
/// 3. Domain-validate the normalized input (accumulate-all)
/// 4. Build criteria and query storage
/// 5. Map rows to [`EntryView`] and compute `pages_count`
///
/// Storage is never queried when either validation step fails.
pub struct ListEntries {
    entry_repo: Arc<dyn EntryRepositoryPort>,
}

impl ListEntries {
    /// Create a new use case instance from a trait object
    /// 从 trait 对象创建新的用例实例
    pub fn from_arc(entry_repo: Arc<dyn EntryRepositoryPort>) -> Self {
        Self { entry_repo }
    }

    #[tracing::instrument(name = "usecase.list_entries.execute", skip(self, raw))]
    pub async fn execute(&self, raw: &Value) -> Result<ListEntriesResult, ListEntriesError> {
        let normalized = InputNormalizer::normalize(raw);

        // Transport checks read `raw`, never `normalized`.
        TransportValidator::assert_list_input(raw)?;
        DomainValidator::assert_list_input(&normalized)?;

        let criteria = CriteriaBuilder::build(&normalized)?;
        debug!(?criteria, "Built list criteria");

        let page = self
            .entry_repo
            .query(&criteria)
            .await
            .map_err(ListEntriesError::Storage)?;

        let items: Vec<EntryView> = page.rows.iter().map(EntryView::from).collect();

        info!(
            page = criteria.page(),
            per_page = criteria.per_page(),
            returned = items.len(),
            total = page.total,
            "Listed entries"
        );

        Ok(ListEntriesResult {
            items,
            page: criteria.page(),
            per_page: criteria.per_page(),
            total: page.total,
            pages_count: pages_count(page.total, criteria.per_page()),
        })
    }
}
