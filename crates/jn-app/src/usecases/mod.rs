//! Business logic use cases
//!
//! raw payload
//!         ↓
//! ListEntries   → page of entries (normalize → transport → domain → criteria → storage)
//! AddEntry      → persisted entry
//! GetEntry      → single entry by id
//! DeleteEntry   → removal by id

pub mod add_entry;
pub mod delete_entry;
mod error;
pub mod get_entry;
pub mod list_entries;

#[cfg(test)]
pub(crate) mod mocks;

pub use add_entry::AddEntry;
pub use delete_entry::DeleteEntry;
pub use error::EntryCommandError;
pub use get_entry::GetEntry;
pub use list_entries::{ListEntries, ListEntriesError};
