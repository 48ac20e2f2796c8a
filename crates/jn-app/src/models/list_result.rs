use serde::{Deserialize, Serialize};

use crate::models::EntryView;

/// One page of entries plus pagination totals.
/// 一页条目及分页统计。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesResult {
    pub items: Vec<EntryView>,
    pub page: u64,
    pub per_page: u32,
    /// Entries matching the filters, ignoring pagination
    pub total: u64,
    /// `max(1, ceil(total / per_page))`
    pub pages_count: u64,
}
