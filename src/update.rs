//! UPDATE 语句：预定义子句与便捷函数。

use crate::args::ClauseArgs;
use crate::clause::Clause;
use crate::error::FormatError;
use crate::formatter::IDENTIFIER;
use crate::fragment::Fragment;
use crate::select::{identifier_list, where_list};
use crate::set_clause::BUILD_SET;
use crate::statement::Statement;
use std::sync::OnceLock;

/// UPDATE 的子句顺序：`update`, `set`, `where`, `returning`。
pub fn update_statement() -> &'static Statement {
    static STATEMENT: OnceLock<Statement> = OnceLock::new();
    STATEMENT.get_or_init(|| {
        Statement::new([
            Clause::new("update").then(IDENTIFIER),
            Clause::new("set").then(BUILD_SET),
            where_list("where"),
            identifier_list("returning"),
        ])
    })
}

/// 生成 UPDATE；`where_` 为 `NULL` 时省略 WHERE。
pub fn update(
    table: impl Into<Fragment>,
    set: impl Into<Fragment>,
    where_: impl Into<Fragment>,
    args: ClauseArgs,
) -> Result<String, FormatError> {
    let args = args
        .set("update", table)
        .set("set", set)
        .set("where", where_);
    update_statement().format(args)
}
