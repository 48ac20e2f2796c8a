use crate::entry::Entry;

/// One page of rows returned by storage, plus the filtered total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPage {
    pub rows: Vec<Entry>,
    /// Count of all rows matching the filters, ignoring pagination.
    pub total: u64,
}

/// `ceil(total / per_page)`, never less than 1.
pub fn pages_count(total: u64, per_page: u32) -> u64 {
    let per_page = u64::from(per_page.max(1));
    total.div_ceil(per_page).max(1)
}
