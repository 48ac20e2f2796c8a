use thiserror::Error;

/// A stored row that cannot be turned back into a domain entry.
#[derive(Debug, Error)]
pub enum RowDecodeError {
    #[error("entry {id}: invalid entry_date {value:?}")]
    InvalidDate { id: String, value: String },

    #[error("entry {id}: invalid {column} timestamp {value:?}")]
    InvalidTimestamp {
        id: String,
        column: &'static str,
        value: String,
    },
}
