use std::process::ExitCode;

use jn_app::usecases::{EntryCommandError, ListEntriesError};
use jn_core::{DomainValidationError, EntryId, TransportValidationError};
use serde_json::{json, Value};

/// Machine-readable code for a missing entry
pub const ENTRY_NOT_FOUND: &str = "ENTRY_NOT_FOUND";

/// Failure of a CLI command, mapped to a JSON body and an exit code.
///
/// | kind             | exit |
/// |------------------|------|
/// | `infrastructure` | 1    |
/// | `transport`      | 2    |
/// | `domain`         | 3    |
/// | `not_found`      | 4    |
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Transport(#[from] TransportValidationError),

    #[error(transparent)]
    Domain(#[from] DomainValidationError),

    #[error("entry not found: {0}")]
    NotFound(EntryId),

    /// `--json` text that is not JSON at all
    #[error("invalid --json payload: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Infrastructure(String),
}

impl CommandError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) | Self::MalformedPayload(_) => "transport",
            Self::Domain(_) => "domain",
            Self::NotFound(_) => "not_found",
            Self::Infrastructure(_) => "infrastructure",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Infrastructure(_) => 1,
            Self::Transport(_) | Self::MalformedPayload(_) => 2,
            Self::Domain(_) => 3,
            Self::NotFound(_) => 4,
        }
    }

    /// `{kind, codes}` for client-input errors, `{kind, message}` otherwise.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Transport(err) => json!({ "kind": self.kind(), "codes": [err.code()] }),
            Self::Domain(err) => json!({ "kind": self.kind(), "codes": err.codes() }),
            Self::NotFound(id) => json!({
                "kind": self.kind(),
                "codes": [ENTRY_NOT_FOUND],
                "id": id,
            }),
            Self::MalformedPayload(_) | Self::Infrastructure(_) => {
                json!({ "kind": self.kind(), "message": self.to_string() })
            }
        }
    }
}

impl From<&CommandError> for ExitCode {
    fn from(err: &CommandError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

impl From<ListEntriesError> for CommandError {
    fn from(err: ListEntriesError) -> Self {
        match err {
            ListEntriesError::Transport(e) => Self::Transport(e),
            ListEntriesError::Domain(e) => Self::Domain(e),
            ListEntriesError::Storage(e) => Self::Infrastructure(format!("storage failure: {:#}", e)),
        }
    }
}

impl From<EntryCommandError> for CommandError {
    fn from(err: EntryCommandError) -> Self {
        match err {
            EntryCommandError::Transport(e) => Self::Transport(e),
            EntryCommandError::Domain(e) => Self::Domain(e),
            EntryCommandError::NotFound(id) => Self::NotFound(id),
            EntryCommandError::Storage(e) => {
                Self::Infrastructure(format!("storage failure: {:#}", e))
            }
        }
    }
}
