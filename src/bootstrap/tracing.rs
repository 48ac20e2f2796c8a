//! Tracing configuration for the journal CLI
//!
//! stdout carries command output, so every log layer writes to stderr or to
//! a file.
//!
//! ## Layers / 层
//!
//! - **EnvFilter**: `RUST_LOG` wins, then `[logging] filter`, then build defaults
//! - **stderr**: timestamped fmt layer with file/line/target
//! - **file**: non-blocking `journal.log` under `[logging] directory`, when set
//! - **log bridge**: `log` records from dependencies are forwarded via `tracing-log`

use std::{fs, io, path::Path, sync::OnceLock};

use jn_core::AppConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "journal.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - A non-empty configured filter is used as-is
/// - **Development**: debug level for the journal crates
/// - **Production**: info level for the journal crates
/// - Diesel and r2d2 internals stay at warn
fn build_filter_directives(is_dev: bool, configured: &str) -> Vec<String> {
    let configured = configured.trim();
    if !configured.is_empty() {
        return vec![configured.to_string()];
    }

    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "diesel=warn".to_string(),
        "r2d2=warn".to_string(),
        if is_dev { "jn_infra=debug" } else { "jn_infra=info" }.to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once in `main`, after the config is resolved and before wiring.
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - A global subscriber or `log` logger is already registered
/// - The configured filter directives are invalid
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), &config.log_filter);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directives.join(","))?,
    };

    let file_writer = match config.log_directory.as_deref().map(build_file_writer) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, using stderr only: {err:#}");
            None
        }
        None => None,
    };

    // "2025-01-15 10:30:45.123  INFO src/main.rs:42 journal: message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let subscriber = registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer);

    ::tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
