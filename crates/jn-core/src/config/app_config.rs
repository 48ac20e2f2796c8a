use std::path::PathBuf;

/// Pool size used when the config file does not set one.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database path (path info only, no existence check)
    /// SQLite 数据库路径（仅路径信息，不检查文件是否存在）
    pub database_path: PathBuf,

    /// Maximum connections in the database pool
    pub pool_size: u32,

    /// Tracing filter directives, e.g. `info,jn_infra=debug`.
    /// Empty means "use the build default".
    pub log_filter: String,

    /// Directory for the log file; `None` logs to stderr only
    pub log_directory: Option<PathBuf>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys map to empty values; this method does not validate.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            database_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("database_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            pool_size: toml_value
                .get("storage")
                .and_then(|s| s.get("pool_size"))
                .and_then(|v| v.as_integer())
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(DEFAULT_POOL_SIZE),
            log_filter: toml_value
                .get("logging")
                .and_then(|l| l.get("filter"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            log_directory: toml_value
                .get("logging")
                .and_then(|l| l.get("directory"))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            database_path: PathBuf::new(),
            pool_size: DEFAULT_POOL_SIZE,
            log_filter: String::new(),
            log_directory: None,
        }
    }

    /// Create AppConfig with paths under `data_dir` for production use
    /// 生产环境使用：基于 `data_dir` 创建默认路径
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("journal.db"),
            pool_size: DEFAULT_POOL_SIZE,
            log_filter: String::new(),
            log_directory: Some(data_dir.join("logs")),
        }
    }
}
