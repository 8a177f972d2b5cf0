//! 转义函数与输入修饰器：`raw`、`list`、`pairs`。

use crate::fragment::Fragment;
use std::fmt;

/// 字面量转义：把 `'` 替换为 `''`。
pub fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// 标识符转义：把 `"` 替换为 `""`。
pub fn escape_identifier(s: &str) -> String {
    s.replace('"', "\"\"")
}

/// Raw：已经是合法 SQL 的文本，任何格式化器都原样透传，不转义、不拆分。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raw {
    pub(crate) expr: String,
}

impl Raw {
    pub fn new(expr: impl Into<String>) -> Self {
        Self { expr: expr.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    pub fn into_string(self) -> String {
        self.expr
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

/// 标记为原样拼入 SQL。
pub fn raw(expr: impl Into<String>) -> Fragment {
    Fragment::Raw(Raw::new(expr))
}

/// SQL 的 `DEFAULT` 关键字（用于 INSERT/UPDATE 的取值位置）。
pub fn default_keyword() -> Fragment {
    raw("DEFAULT")
}

/// List：把任意可迭代值收集为序列。
pub fn list<I>(items: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    Fragment::List(items.into_iter().map(Into::into).collect())
}

/// Pairs：显式有序的 (key, value) 序列，输出顺序即迭代顺序。
pub fn pairs<I, K, V>(items: I) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Fragment>,
    V: Into<Fragment>,
{
    Fragment::Pairs(
        items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}
