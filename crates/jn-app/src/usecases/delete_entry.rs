use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use jn_core::input::{keys, trimmed_string};
use jn_core::ports::EntryRepositoryPort;
use jn_core::{DomainValidator, EntryId, TransportValidator};

use crate::usecases::EntryCommandError;

/// Use case for deleting a journal entry.
/// 删除日记条目的用例。
pub struct DeleteEntry {
    entry_repo: Arc<dyn EntryRepositoryPort>,
}

impl DeleteEntry {
    pub fn from_arc(entry_repo: Arc<dyn EntryRepositoryPort>) -> Self {
        Self { entry_repo }
    }

    /// Returns the id that was removed.
    #[tracing::instrument(name = "usecase.delete_entry.execute", skip(self, raw))]
    pub async fn execute(&self, raw: &Value) -> Result<EntryId, EntryCommandError> {
        TransportValidator::assert_id_input(raw)?;

        let id = trimmed_string(raw, keys::ID).unwrap_or_default();
        let id = DomainValidator::check_entry_id(&id)?;

        let removed = self
            .entry_repo
            .delete_by_id(&id)
            .await
            .map_err(EntryCommandError::Storage)?;
        if !removed {
            return Err(EntryCommandError::NotFound(id));
        }

        info!(entry_id = %id, "Deleted entry");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::mocks::MockEntryRepo;
    use jn_core::TransportErrorCode;
    use serde_json::json;

    const ID: &str = "6f1c2d3e-4b5a-4c6d-8e7f-0123456789ab";

    #[tokio::test]
    async fn test_execute_deletes_existing_entry() {
        let mut repo = MockEntryRepo::new();
        repo.expect_delete_by_id()
            .withf(|id| id.as_str() == ID)
            .times(1)
            .returning(|_| Ok(true));

        let uc = DeleteEntry::from_arc(Arc::new(repo));
        let id = uc.execute(&json!({ "id": ID })).await.unwrap();

        assert_eq!(id.as_str(), ID);
    }

    #[tokio::test]
    async fn test_missing_row_is_not_found() {
        let mut repo = MockEntryRepo::new();
        repo.expect_delete_by_id().times(1).returning(|_| Ok(false));

        let uc = DeleteEntry::from_arc(Arc::new(repo));
        let result = uc.execute(&json!({ "id": ID })).await;

        assert!(matches!(result, Err(EntryCommandError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_id_is_required() {
        let mut repo = MockEntryRepo::new();
        repo.expect_delete_by_id().times(0);

        let uc = DeleteEntry::from_arc(Arc::new(repo));
        let result = uc.execute(&json!({ "id": null })).await;

        match result {
            Err(EntryCommandError::Transport(err)) => {
                assert_eq!(err.code(), TransportErrorCode::IdRequired)
            }
            other => panic!("expected transport failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut repo = MockEntryRepo::new();
        repo.expect_delete_by_id()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection reset")));

        let uc = DeleteEntry::from_arc(Arc::new(repo));
        let result = uc.execute(&json!({ "id": ID })).await;

        assert!(matches!(result, Err(EntryCommandError::Storage(_))));
    }
}
