//! Journal Application Orchestration Layer
//!
//! This crate contains the use cases that turn raw request payloads into
//! validated criteria or persisted entries, and the response models returned
//! to callers.

pub mod deps;
pub mod models;
pub mod usecases;

pub use deps::AppDeps;
pub use models::{EntryView, ListEntriesResult};
