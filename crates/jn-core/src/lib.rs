//! # jn-core
//!
//! Core domain models and business logic for the journal service.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the entry model, the list-entries query pipeline (normalize → validate → criteria),
//! validation error types and the ports implemented by `jn-infra`.

// Public module exports
pub mod config;
pub mod entry;
pub mod ids;
pub mod input;
pub mod ports;
pub mod query;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use entry::{Entry, EntryDraft};
pub use ids::EntryId;
pub use query::{
    CriteriaBuilder, EntryPage, InputNormalizer, ListEntriesCriteria, NormalizedListInput,
    SortDirection, SortField,
};
pub use validation::{
    DomainErrorCode, DomainValidationError, DomainValidator, TransportErrorCode,
    TransportValidationError, TransportValidator,
};
