//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (db pool, repositories, clock) / 创建 infra 层具体实现
//! - ✅ Inject them into [`AppDeps`] through port traits / 通过 Port trait 注入到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//!
//! > **This is the only place allowed to depend on jn-infra + jn-app simultaneously.**
//! > **这是唯一允许同时依赖 jn-infra 和 jn-app 的地方。**

use std::path::Path;
use std::sync::Arc;

use jn_app::AppDeps;
use jn_core::config::AppConfig;
use jn_core::ports::{ClockPort, EntryRepositoryPort};
use jn_infra::db::mappers::EntryRowMapper;
use jn_infra::db::pool::{init_db_pool, DbPool};
use jn_infra::db::repositories::DieselEntryRepository;
use jn_infra::db::DieselSqliteExecutor;
use jn_infra::{InMemoryEntryRepository, SystemClock};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Which entry repository to wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// SQLite file at `AppConfig::database_path`
    #[default]
    Sqlite,
    /// Process-local store, discarded on exit
    InMemory,
}

/// Create SQLite database connection pool
/// 创建 SQLite 数据库连接池
///
/// # Errors / 错误
///
/// Returns `WiringError::DatabaseInit` if:
/// - The path is empty or not UTF-8 / 路径为空或不是 UTF-8
/// - Parent directory creation fails / 父目录创建失败
/// - Database pool creation or migration fails / 数据库池创建或迁移失败
fn create_db_pool(db_path: &Path, pool_size: u32) -> WiringResult<DbPool> {
    if db_path.as_os_str().is_empty() {
        return Err(WiringError::DatabaseInit("Database path is empty".to_string()));
    }

    // Ensure parent directory exists
    // 确保父目录存在
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url, pool_size)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {:#}", e)))
}

fn create_entry_repo(
    config: &AppConfig,
    mode: StorageMode,
) -> WiringResult<Arc<dyn EntryRepositoryPort>> {
    match mode {
        StorageMode::Sqlite => {
            let pool = create_db_pool(&config.database_path, config.pool_size)?;
            info!(path = %config.database_path.display(), "Opened SQLite entry store");
            Ok(Arc::new(DieselEntryRepository::new(
                DieselSqliteExecutor::new(pool),
                EntryRowMapper,
                EntryRowMapper,
            )))
        }
        StorageMode::InMemory => {
            info!("Using in-memory entry store");
            Ok(Arc::new(InMemoryEntryRepository::new()))
        }
    }
}

/// Wire all dependencies for the use cases
/// 为用例连接所有依赖
pub fn wire_dependencies(config: &AppConfig, mode: StorageMode) -> WiringResult<AppDeps> {
    let entry_repo = create_entry_repo(config, mode)?;
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    Ok(AppDeps { entry_repo, clock })
}
