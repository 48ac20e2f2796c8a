use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use jn_core::entry::NormalizedEntryInput;
use jn_core::ports::{ClockPort, EntryRepositoryPort};
use jn_core::{DomainValidator, Entry, TransportValidator};

use crate::models::EntryView;
use crate::usecases::EntryCommandError;

/// Use case for writing a new journal entry.
/// 新增日记条目的用例。
pub struct AddEntry {
    entry_repo: Arc<dyn EntryRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl AddEntry {
    pub fn from_ports(
        entry_repo: Arc<dyn EntryRepositoryPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self { entry_repo, clock }
    }

    /// Validates the payload, stamps the entry with the current time and
    /// persists it. Returns the stored entry.
    #[tracing::instrument(name = "usecase.add_entry.execute", skip(self, raw))]
    pub async fn execute(&self, raw: &Value) -> Result<EntryView, EntryCommandError> {
        TransportValidator::assert_new_entry_input(raw)?;

        let input = NormalizedEntryInput::from_raw(raw);
        let draft = DomainValidator::check_entry_input(&input)?;

        let entry = Entry::create(draft, self.clock.now());

        self.entry_repo
            .insert(&entry)
            .await
            .map_err(EntryCommandError::Storage)?;

        info!(entry_id = %entry.id, date = %entry.date, "Added entry");
        Ok(EntryView::from(&entry))
    }
}
