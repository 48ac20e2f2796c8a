//! CLI commands: build a raw payload from flags, run the use case, return JSON.
//! 命令层：由参数构造原始负载，执行用例，返回 JSON。

pub mod entries;
pub mod error;

pub use entries::{run, Command};
pub use error::CommandError;
