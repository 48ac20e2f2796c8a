//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for use case construction.
//! 此模块定义用例构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;
use jn_core::ports::{ClockPort, EntryRepositoryPort};

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的 - 无默认值，无可选字段。
#[derive(Clone)]
pub struct AppDeps {
    // Storage dependencies / 存储依赖
    pub entry_repo: Arc<dyn EntryRepositoryPort>,

    // Time dependencies / 时间依赖
    pub clock: Arc<dyn ClockPort>,
}
