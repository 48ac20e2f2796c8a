//! Response models returned to the command layer
//! 返回给命令层的响应模型

mod entry_view;
mod list_result;

pub use entry_view::EntryView;
pub use list_result::ListEntriesResult;
