use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use jn_core::input::{keys, trimmed_string};
use jn_core::ports::EntryRepositoryPort;
use jn_core::{DomainValidator, TransportValidator};

use crate::models::EntryView;
use crate::usecases::EntryCommandError;

/// Use case for reading one journal entry by id.
/// 按 ID 读取单个日记条目的用例。
pub struct GetEntry {
    entry_repo: Arc<dyn EntryRepositoryPort>,
}

impl GetEntry {
    pub fn from_arc(entry_repo: Arc<dyn EntryRepositoryPort>) -> Self {
        Self { entry_repo }
    }

    #[tracing::instrument(name = "usecase.get_entry.execute", skip(self, raw))]
    pub async fn execute(&self, raw: &Value) -> Result<EntryView, EntryCommandError> {
        TransportValidator::assert_id_input(raw)?;

        let id = trimmed_string(raw, keys::ID).unwrap_or_default();
        let id = DomainValidator::check_entry_id(&id)?;

        let entry = self
            .entry_repo
            .find_by_id(&id)
            .await
            .map_err(EntryCommandError::Storage)?
            .ok_or_else(|| EntryCommandError::NotFound(id.clone()))?;

        debug!(entry_id = %entry.id, "Loaded entry");
        Ok(EntryView::from(&entry))
    }
}
