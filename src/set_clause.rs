//! SET 赋值列表：把有序 (key, value) 转换为 `col=value, ...`。

use crate::error::FormatError;
use crate::formatter::{Aggregator, IDENTIFIER, VALUE};
use crate::fragment::Fragment;
use crate::style::{IdentifierStyle, default_identifier_style};
use crate::where_clause::to_pairs;

fn join_set(input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError> {
    let mut pieces = Vec::new();
    for (k, v) in to_pairs(input)? {
        let column = match k {
            Fragment::Raw(r) => r.into_string(),
            Fragment::Value(key) if key.as_str().is_some() => {
                IDENTIFIER.apply(Fragment::Value(key), style)?.into_sql()?
            }
            other => {
                return Err(FormatError::MalformedPair(format!(
                    "key must be text, found {}",
                    other.kind()
                )));
            }
        };
        let value = VALUE.apply(v, style)?.into_sql()?;
        pieces.push(format!("{column}={value}"));
    }
    Ok(Fragment::text(pieces.join(", ")))
}

/// 赋值构建器：可迭代输入生成逗号连接的赋值列表，文本/Raw 原样透传。
pub const BUILD_SET: Aggregator = Aggregator::new("build_set", join_set);

/// 按全局默认标识符风格构建 SET 列表。
pub fn build_set(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    BUILD_SET.apply(x.into(), default_identifier_style())
}
