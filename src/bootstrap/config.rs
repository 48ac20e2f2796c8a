//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No business rules / 禁止业务规则**
//!
//! Platform paths are filled in by [`resolve_config`], never by
//! [`load_config`].

use anyhow::Context;
use std::path::PathBuf;
use jn_core::config::AppConfig;

/// Directory name under the platform data dir
const APP_DIR_NAME: &str = "journal";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Pure data loading: missing sections result in empty values.
/// 仅纯数据加载：缺失的部分导致空值。
///
/// # Errors / 错误
///
/// - File cannot be read (I/O error) / 无法读取文件
/// - Content is not valid TOML (parse error) / 内容不是有效的 TOML
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    AppConfig::from_toml(&toml_value)
}

/// Platform data directory for the journal (e.g. `~/.local/share/journal`)
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("Could not determine the platform data directory")
}

/// Config used by the CLI: the file when given, otherwise system defaults.
///
/// A file that leaves `database_path` empty gets the default database path.
pub fn resolve_config(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) => {
            let config = load_config(path)?;
            if config.database_path.as_os_str().is_empty() {
                let defaults = AppConfig::with_system_defaults(default_data_dir()?);
                return Ok(AppConfig {
                    database_path: defaults.database_path,
                    ..config
                });
            }
            Ok(config)
        }
        None => Ok(AppConfig::with_system_defaults(default_data_dir()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [storage]
            database_path = "/path/to/journal.db"
            pool_size = 2

            [logging]
            filter = "warn,jn_app=debug"
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.database_path, PathBuf::from("/path/to/journal.db"));
        assert_eq!(config.pool_size, 2);
        assert_eq!(config.log_filter, "warn,jn_app=debug");
        assert_eq!(config.log_directory, None);
    }

    #[test]
    fn test_load_config_does_not_fill_defaults() {
        let temp_file = write_config("[storage]\n");
        let config = load_config(temp_file.path().to_path_buf()).unwrap();
        assert_eq!(config.database_path, PathBuf::new());
    }

    #[test]
    fn test_load_config_fails_on_missing_file() {
        let result = load_config(PathBuf::from("/nonexistent/journal/config.toml"));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_fails_on_invalid_toml() {
        let temp_file = write_config("[storage\ndatabase_path = ");
        let message = format!("{:#}", load_config(temp_file.path().to_path_buf()).unwrap_err());
        assert!(message.contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_resolve_config_keeps_explicit_paths() {
        let temp_file = write_config("[storage]\ndatabase_path = \"/tmp/j.db\"\n");
        let config = resolve_config(Some(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/j.db"));
    }
}
