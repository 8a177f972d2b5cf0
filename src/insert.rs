//! INSERT 语句：预定义子句与便捷函数。

use crate::args::ClauseArgs;
use crate::clause::Clause;
use crate::error::FormatError;
use crate::formatter::{CONCAT_BY_COMMA, IDENTIFIER, PAREN, VALUE};
use crate::fragment::Fragment;
use crate::select::identifier_list;
use crate::statement::Statement;
use std::sync::OnceLock;

/// INSERT 的子句顺序：`insert into`, `columns`, `values`, `returning`。
///
/// `columns` 没有关键字，输出 `(a, b)`；`values` 输出 `VALUES ('x', 1)`。
pub fn insert_statement() -> &'static Statement {
    static STATEMENT: OnceLock<Statement> = OnceLock::new();
    STATEMENT.get_or_init(|| {
        Statement::new([
            Clause::new("insert into").then(IDENTIFIER),
            Clause::new("")
                .named("columns")
                .then(IDENTIFIER)
                .then(CONCAT_BY_COMMA)
                .then(PAREN),
            Clause::new("values")
                .then(VALUE)
                .then(CONCAT_BY_COMMA)
                .then(PAREN),
            identifier_list("returning"),
        ])
    })
}

/// 生成 INSERT。
pub fn insert(
    table: impl Into<Fragment>,
    values: impl Into<Fragment>,
    args: ClauseArgs,
) -> Result<String, FormatError> {
    let args = args.set("insert into", table).set("values", values);
    insert_statement().format(args)
}
