//! Journal entry domain model.
//! 日记条目领域模型。

pub mod date;
mod draft;
mod model;

pub use date::{format_calendar_date, format_timestamp, parse_calendar_date, parse_timestamp};
pub use draft::{EntryDraft, NormalizedEntryInput};
pub use model::Entry;
