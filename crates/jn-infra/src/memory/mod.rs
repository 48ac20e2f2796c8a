//! In-memory storage used by tests and `--in-memory` runs.

mod entry_repo;

pub use entry_repo::InMemoryEntryRepository;
