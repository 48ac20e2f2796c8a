use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use jn_core::ports::EntryRepositoryPort;
use jn_core::{Entry, EntryId, EntryPage, ListEntriesCriteria};

/// Entry store backed by a `Vec`, applying criteria with
/// [`ListEntriesCriteria::matches`] and [`ListEntriesCriteria::compare`].
#[derive(Default)]
pub struct InMemoryEntryRepository {
    entries: RwLock<Vec<Entry>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl EntryRepositoryPort for InMemoryEntryRepository {
    async fn query(&self, criteria: &ListEntriesCriteria) -> Result<EntryPage> {
        let entries = self.entries.read().await;

        let mut matched: Vec<&Entry> = entries.iter().filter(|e| criteria.matches(e)).collect();
        matched.sort_by(|a, b| criteria.compare(a, b));

        let total = matched.len() as u64;
        let offset = usize::try_from(criteria.offset()).unwrap_or(usize::MAX);
        let rows = matched
            .into_iter()
            .skip(offset)
            .take(criteria.per_page() as usize)
            .cloned()
            .collect();

        Ok(EntryPage { rows, total })
    }

    async fn count(&self, criteria: &ListEntriesCriteria) -> Result<u64> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| criteria.matches(e)).count() as u64)
    }

    async fn insert(&self, entry: &Entry) -> Result<()> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.id == entry.id) {
            bail!("entry {} already exists", entry.id);
        }
        entries.push(entry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| &e.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &EntryId) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| &e.id != id);
        Ok(entries.len() < before)
    }
}
