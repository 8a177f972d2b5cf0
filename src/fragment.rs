//! Fragment：格式化流水线中流动的输入/输出值。
//!
//! 用显式的标签变体代替运行时类型判断：标量、原样 SQL、序列、有序键值对。

use crate::error::FormatError;
use crate::modifiers::Raw;
use crate::value::SqlValue;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// 格式化器的输入与输出。
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Value(SqlValue),
    Raw(Raw),
    /// 有序序列（可迭代且非文本）。
    List(Vec<Fragment>),
    /// 有序 (key, value) 对，来自映射或显式的 pair 序列。
    Pairs(Vec<(Fragment, Fragment)>),
}

impl Fragment {
    /// 普通文本（格式化器的输出也是这种形式）。
    pub fn text(s: impl Into<Cow<'static, str>>) -> Self {
        Self::Value(SqlValue::String(s.into()))
    }

    pub fn null() -> Self {
        Self::Value(SqlValue::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Value(SqlValue::Null))
    }

    /// 可迭代且非文本：`List` 或 `Pairs`。
    pub fn is_iterable(&self) -> bool {
        matches!(self, Self::List(_) | Self::Pairs(_))
    }

    /// 文本内容：普通文本或 Raw。
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(v) => v.as_str(),
            Self::Raw(r) => Some(r.as_str()),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Value(v) => v.kind(),
            Self::Raw(_) => "raw",
            Self::List(_) => "list",
            Self::Pairs(_) => "pairs",
        }
    }

    /// 取出最终 SQL 文本；非文本报 `UnsupportedValue`。
    pub fn into_sql(self) -> Result<String, FormatError> {
        match self {
            Self::Value(SqlValue::String(s)) => Ok(s.into_owned()),
            Self::Raw(r) => Ok(r.into_string()),
            other => Err(FormatError::unsupported("sql output", other.kind())),
        }
    }
}

impl From<SqlValue> for Fragment {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

impl From<Raw> for Fragment {
    fn from(v: Raw) -> Self {
        Self::Raw(v)
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Fragment {
                fn from(v: $t) -> Self {
                    Self::Value(SqlValue::from(v))
                }
            }
        )+
    };
}

impl_from_scalar!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &str,
    time::Date,
    time::Time,
    time::PrimitiveDateTime,
    time::OffsetDateTime,
);

impl<T: Into<Fragment>> From<Option<T>> for Fragment {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::null(),
        }
    }
}

impl<T: Into<Fragment>> From<Vec<T>> for Fragment {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Fragment>, const N: usize> From<[T; N]> for Fragment {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// 二元组是长度为 2 的序列，`Vec<(K, V)>` 因此可以作为有序 pair 序列使用。
impl<A: Into<Fragment>, B: Into<Fragment>> From<(A, B)> for Fragment {
    fn from((a, b): (A, B)) -> Self {
        Self::List(vec![a.into(), b.into()])
    }
}

impl<K: Into<Fragment>, V: Into<Fragment>> From<IndexMap<K, V>> for Fragment {
    fn from(v: IndexMap<K, V>) -> Self {
        Self::Pairs(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<Fragment>, V: Into<Fragment>> From<BTreeMap<K, V>> for Fragment {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::Pairs(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
