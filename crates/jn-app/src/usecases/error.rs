use jn_core::{DomainValidationError, EntryId, TransportValidationError};

/// Error type for the single-entry use cases (add, get, delete)
/// 单条目用例（新增、获取、删除）的错误类型
#[derive(Debug, thiserror::Error)]
pub enum EntryCommandError {
    #[error(transparent)]
    Transport(#[from] TransportValidationError),

    #[error(transparent)]
    Domain(#[from] DomainValidationError),

    #[error("entry not found: {0}")]
    NotFound(EntryId),

    #[error("storage failure: {0:#}")]
    Storage(anyhow::Error),
}
