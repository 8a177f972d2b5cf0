//! halo-sql-format：把映射、序列、标量格式化为 SQL 片段与完整语句。
//!
//! 只生成文本，不连接数据库。

pub mod args;
pub mod clause;
pub mod delete;
pub mod error;
pub mod formatter;
#[cfg(test)]
mod formatter_tests;
pub mod fragment;
pub mod insert;
pub mod macros;
pub mod model;
#[cfg(test)]
mod model_tests;
pub mod modifiers;
pub mod select;
pub mod set_clause;
pub mod statement;
mod string_builder;
pub mod style;
pub mod update;
pub mod value;
pub mod where_clause;

pub use crate::args::{ClauseArgs, normalize_clause_name};
pub use crate::clause::Clause;
pub use crate::delete::{delete, delete_statement};
pub use crate::error::FormatError;
pub use crate::formatter::{
    Aggregator, CONCAT_BY_AND, CONCAT_BY_COMMA, CONCAT_BY_OR, CONCAT_BY_SPACE, FnFormatter,
    Formatter, IDENTIFIER, PAREN, Qualifier, VALUE, concat_by_and, concat_by_comma, concat_by_or,
    concat_by_space, formatter_fn, identifier, identifier_with_style, paren, value,
};
pub use crate::fragment::Fragment;
pub use crate::insert::{insert, insert_statement};
pub use crate::model::{ColumnValue, Model, ModelError, ModelOptions, arrange};
pub use crate::modifiers::{
    Raw, default_keyword, escape_identifier, escape_literal, list, pairs, raw,
};
pub use crate::select::{identifier_list, select, select_statement, single_value, where_list};
pub use crate::set_clause::{BUILD_SET, build_set};
pub use crate::statement::Statement;
pub use crate::style::{
    IdentifierStyle, default_identifier_style, set_default_identifier_style,
    set_default_identifier_style_scoped,
};
pub use crate::update::{update, update_statement};
pub use crate::value::SqlValue;
pub use crate::where_clause::{
    ALLOWED_OPERATORS, BUILD_WHERE, build_where, infer_operator, is_allowed_operator,
    normalize_operator, split_key,
};

/// 推荐的便捷命名空间：允许 `use halo_space::sqlformat::{...}` 形式导入。
pub mod sqlformat {
    pub use crate::*;
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::error::FormatError;
    use crate::fragment::Fragment;
    use crate::style::{DefaultStyleGuard, IdentifierStyle, set_default_identifier_style_scoped};

    /// 依赖全局默认风格的测试先持有这个 guard。
    pub(crate) fn unquoted() -> DefaultStyleGuard {
        set_default_identifier_style_scoped(IdentifierStyle::Unquoted)
    }

    pub(crate) fn sql(result: Result<Fragment, FormatError>) -> String {
        result.unwrap().into_sql().unwrap()
    }
}
