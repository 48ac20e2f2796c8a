//! Mock implementations of core ports for use case tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jn_core::ports::{ClockPort, EntryRepositoryPort};
use jn_core::{Entry, EntryId, EntryPage, ListEntriesCriteria};
use mockall::mock;

mock! {
    pub EntryRepo {}

    #[async_trait]
    impl EntryRepositoryPort for EntryRepo {
        async fn query(&self, criteria: &ListEntriesCriteria) -> anyhow::Result<EntryPage>;
        async fn count(&self, criteria: &ListEntriesCriteria) -> anyhow::Result<u64>;
        async fn insert(&self, entry: &Entry) -> anyhow::Result<()>;
        async fn find_by_id(&self, id: &EntryId) -> anyhow::Result<Option<Entry>>;
        async fn delete_by_id(&self, id: &EntryId) -> anyhow::Result<bool>;
    }
}

/// Clock frozen at a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
