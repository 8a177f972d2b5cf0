//! DELETE 语句：预定义子句与便捷函数。

use crate::args::ClauseArgs;
use crate::clause::Clause;
use crate::error::FormatError;
use crate::formatter::IDENTIFIER;
use crate::fragment::Fragment;
use crate::select::{identifier_list, where_list};
use crate::statement::Statement;
use std::sync::OnceLock;

/// DELETE 的子句顺序：`delete from`, `where`, `returning`。
pub fn delete_statement() -> &'static Statement {
    static STATEMENT: OnceLock<Statement> = OnceLock::new();
    STATEMENT.get_or_init(|| {
        Statement::new([
            Clause::new("delete from").then(IDENTIFIER),
            where_list("where"),
            identifier_list("returning"),
        ])
    })
}

pub fn delete(
    table: impl Into<Fragment>,
    where_: impl Into<Fragment>,
    args: ClauseArgs,
) -> Result<String, FormatError> {
    let args = args.set("delete from", table).set("where", where_);
    delete_statement().format(args)
}
