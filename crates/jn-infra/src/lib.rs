//! # jn-infra
//!
//! Storage adapters implementing the `jn-core` ports:
//! a Diesel/SQLite repository, an in-memory repository and the system clock.

pub mod db;
pub mod memory;
pub mod time;

pub use memory::InMemoryEntryRepository;
pub use time::SystemClock;
