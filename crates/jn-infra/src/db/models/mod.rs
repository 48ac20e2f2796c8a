mod entry_row;

pub use entry_row::{EntryRow, NewEntryRow};
