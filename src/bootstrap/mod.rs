pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::resolve_config;
pub use runtime::AppRuntime;
pub use wiring::{wire_dependencies, StorageMode};
