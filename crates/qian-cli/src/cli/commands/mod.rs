//! CLI command handlers, one per file.

mod categories;
mod parse;
mod query;

use qian_core::QueryError;

pub use categories::run_categories;
pub use parse::run_parse;
pub use query::run_query;

/// Message shown to users for each failure kind.
pub fn user_message(err: &QueryError) -> String {
    match err {
        QueryError::NotFound { .. } => "未找到对应的签条，请检查输入。".to_string(),
        QueryError::Storage(e) => format!("签条目录读取失败：{e}"),
        _ => "输入格式错误，请重新填写。".to_string(),
    }
}
