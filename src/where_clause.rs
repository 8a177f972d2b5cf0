//! WHERE 条件构建：把有序 (key, value) 转换为 `AND` 连接的布尔表达式，并推断比较运算符。
//!
//! key 形如 `"name like"` 时，第一个空格之后的部分视为运算符；不在白名单里的运算符会被丢弃，
//! 转而按 value 推断：序列用 `IN`，`NULL` 用 `IS`，其它用 `=`。

use crate::error::FormatError;
use crate::formatter::{Aggregator, CONCAT_BY_COMMA, IDENTIFIER, PAREN, VALUE};
use crate::fragment::Fragment;
use crate::style::{IdentifierStyle, default_identifier_style};

/// 允许出现在 key 里的运算符（大写形式）。
pub const ALLOWED_OPERATORS: &[&str] = &[
    "<",
    ">",
    "<=",
    ">=",
    "=",
    "<>",
    "!=",
    "IS",
    "IS NOT",
    "IN",
    "NOT IN",
    "LIKE",
    "NOT LIKE",
    "NOT SIMILAR TO",
    "SIMILAR TO",
    "~",
    "~*",
    "!~",
    "!~*",
];

/// 大小写不敏感地判断运算符是否在白名单中。
pub fn is_allowed_operator(op: &str) -> bool {
    let op = op.to_uppercase();
    ALLOWED_OPERATORS.iter().any(|&allowed| allowed == op)
}

/// 在第一个空格处拆分 key：`"name not like"` => `("name", Some("not like"))`。
pub fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once(' ') {
        Some((left, op)) => (left, Some(op)),
        None => (key, None),
    }
}

/// 规范化候选运算符：转大写；空串或不在白名单中返回 `None`。
pub fn normalize_operator(op: Option<&str>) -> Option<String> {
    let op = op?;
    if op.is_empty() {
        return None;
    }
    let upper = op.to_uppercase();
    if is_allowed_operator(&upper) {
        Some(upper)
    } else {
        tracing::debug!(operator = op, "discarding operator outside the whitelist");
        None
    }
}

/// 按 value 推断运算符。
pub fn infer_operator(value: &Fragment) -> &'static str {
    if value.is_iterable() {
        "IN"
    } else if value.is_null() {
        "IS"
    } else {
        "="
    }
}

/// 把映射或显式 pair 序列展开成 (key, value) 列表。
///
/// `List` 的每个元素必须是长度为 2 的 `List`。
pub(crate) fn to_pairs(input: Fragment) -> Result<Vec<(Fragment, Fragment)>, FormatError> {
    match input {
        Fragment::Pairs(pairs) => Ok(pairs),
        Fragment::List(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Fragment::List(kv) if kv.len() == 2 => {
                    let mut it = kv.into_iter();
                    match (it.next(), it.next()) {
                        (Some(k), Some(v)) => Ok((k, v)),
                        _ => Err(FormatError::MalformedPair(format!("element {i}"))),
                    }
                }
                other => Err(FormatError::MalformedPair(format!(
                    "element {i} is {}, expected a (key, value) pair",
                    other.kind()
                ))),
            })
            .collect(),
        other => Err(FormatError::MalformedPair(format!(
            "expected pairs, found {}",
            other.kind()
        ))),
    }
}

fn render_right(value: Fragment, style: IdentifierStyle) -> Result<String, FormatError> {
    let v = VALUE.apply(value, style)?;
    let v = if v.is_iterable() {
        PAREN.apply(CONCAT_BY_COMMA.apply(v, style)?, style)?
    } else {
        v
    };
    v.into_sql()
}

fn build_predicate(
    key: Fragment,
    value: Fragment,
    style: IdentifierStyle,
) -> Result<String, FormatError> {
    let (left, op) = match key {
        Fragment::Raw(r) => (r.into_string(), None),
        Fragment::Value(v) => {
            let Some(key) = v.as_str() else {
                return Err(FormatError::MalformedPair(format!(
                    "key must be text, found {}",
                    v.kind()
                )));
            };
            let (left, op) = split_key(key);
            let left = IDENTIFIER.apply(Fragment::text(left.to_string()), style)?;
            (left.into_sql()?, normalize_operator(op))
        }
        other => {
            return Err(FormatError::MalformedPair(format!(
                "key must be text, found {}",
                other.kind()
            )));
        }
    };

    let op = match op {
        Some(op) => op,
        None => infer_operator(&value).to_string(),
    };
    let right = render_right(value, style)?;
    Ok(format!("{left} {op} {right}"))
}

fn join_where(input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError> {
    let pieces = to_pairs(input)?
        .into_iter()
        .map(|(k, v)| build_predicate(k, v, style))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Fragment::text(pieces.join(" AND ")))
}

/// 条件构建器：可迭代输入生成 `AND` 连接的表达式，文本/Raw 原样透传。
pub const BUILD_WHERE: Aggregator = Aggregator::new("build_where", join_where);

/// 按全局默认标识符风格构建 WHERE 表达式。空输入得到空串。
pub fn build_where(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    BUILD_WHERE.apply(x.into(), default_identifier_style())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_key_on_first_space() {
        assert_eq!(split_key("id"), ("id", None));
        assert_eq!(split_key("name like"), ("name", Some("like")));
        assert_eq!(split_key("id not in"), ("id", Some("not in")));
        assert_eq!(split_key("name "), ("name", Some("")));
    }

    #[test]
    fn operator_whitelist_is_case_insensitive() {
        assert!(is_allowed_operator("like"));
        assert!(is_allowed_operator("Not Similar To"));
        assert!(is_allowed_operator("!~*"));
        assert!(!is_allowed_operator("bogusop"));
        assert!(!is_allowed_operator("note like"));
    }

    #[test]
    fn normalize_operator_drops_unknown() {
        assert_eq!(normalize_operator(Some("like")), Some("LIKE".to_string()));
        assert_eq!(normalize_operator(Some("is not")), Some("IS NOT".to_string()));
        assert_eq!(normalize_operator(Some("bogusop")), None);
        assert_eq!(normalize_operator(Some("")), None);
        assert_eq!(normalize_operator(None), None);
    }

    #[test]
    fn infer_operator_from_value() {
        assert_eq!(infer_operator(&Fragment::from(vec![1, 2])), "IN");
        assert_eq!(infer_operator(&Fragment::null()), "IS");
        assert_eq!(infer_operator(&Fragment::from("x")), "=");
        assert_eq!(infer_operator(&crate::raw("now()")), "=");
    }
}
