//! SELECT 语句：预定义子句与便捷函数。

use crate::args::ClauseArgs;
use crate::clause::Clause;
use crate::error::FormatError;
use crate::formatter::{CONCAT_BY_COMMA, CONCAT_BY_SPACE, IDENTIFIER, VALUE};
use crate::fragment::Fragment;
use crate::modifiers::raw;
use crate::statement::Statement;
use crate::where_clause::BUILD_WHERE;
use std::sync::OnceLock;

/// `SELECT` 列表、`FROM` 等逗号分隔的标识符列表。
pub fn identifier_list(prefix: &str) -> Clause {
    Clause::new(prefix).then(IDENTIFIER).then(CONCAT_BY_COMMA)
}

/// 单个字面量，如 `LIMIT`、`OFFSET`。
pub fn single_value(prefix: &str) -> Clause {
    Clause::new(prefix).then(VALUE)
}

/// 条件表达式，如 `WHERE`、`HAVING`。
pub fn where_list(prefix: &str) -> Clause {
    Clause::new(prefix).then(BUILD_WHERE)
}

/// SELECT 的子句顺序：
/// `select`, `from`, `joins`, `where`, `group by`, `having`, `order by`, `limit`, `offset`。
pub fn select_statement() -> &'static Statement {
    static STATEMENT: OnceLock<Statement> = OnceLock::new();
    STATEMENT.get_or_init(|| {
        Statement::new([
            identifier_list("select"),
            identifier_list("from"),
            Clause::new("").named("joins").then(CONCAT_BY_SPACE),
            where_list("where"),
            identifier_list("group by"),
            where_list("having"),
            identifier_list("order by"),
            single_value("limit"),
            single_value("offset"),
        ])
    })
}

/// 生成 SELECT；`select` 未指定时为 `*`，`where_` 为 `NULL` 时省略 WHERE。
pub fn select(
    table: impl Into<Fragment>,
    where_: impl Into<Fragment>,
    args: ClauseArgs,
) -> Result<String, FormatError> {
    let args = args
        .set("from", table)
        .set("where", where_)
        .set_default("select", raw("*"));
    select_statement().format(args)
}
