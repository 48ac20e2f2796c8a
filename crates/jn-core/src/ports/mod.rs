//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

mod clock;
mod entry_repository;

pub use clock::ClockPort;
pub use entry_repository::EntryRepositoryPort;
