//! 宏集合：用字面量语法构造有序 pair 与子句参数。

/// 构造有序的 `Fragment::Pairs`，顺序即书写顺序。
///
/// ```
/// use halo_space::{build_where, pairs};
/// let sql = build_where(pairs! { "id" => 5, "name like" => "A%" }).unwrap();
/// assert_eq!(sql.as_str(), Some("id = 5 AND name LIKE 'A%'"));
/// ```
#[macro_export]
macro_rules! pairs {
    () => {
        $crate::Fragment::Pairs(Vec::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Fragment::Pairs(vec![
            $( ($crate::Fragment::from($key), $crate::Fragment::from($value)) ),+
        ])
    };
}

/// 构造 [`ClauseArgs`](crate::ClauseArgs)。
///
/// ```
/// use halo_space::{clause_args, raw, select_statement};
/// let sql = select_statement()
///     .format(clause_args! { "select" => raw("*"), "from_" => "person" })
///     .unwrap();
/// assert_eq!(sql, "SELECT * FROM person");
/// ```
#[macro_export]
macro_rules! clause_args {
    () => {
        $crate::ClauseArgs::new()
    };
    ($($name:expr => $arg:expr),+ $(,)?) => {
        $crate::ClauseArgs::new()$(.set($name, $arg))+
    };
}
